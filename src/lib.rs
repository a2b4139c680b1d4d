// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Pointer-reactive gallery grid animation engine.
//!
//! Tiltgrid maps a continuously sampled pointer position into five visual
//! effect channels (translation, skew, contrast, scale, brightness),
//! smooths them with a self-terminating per-frame interpolation loop, and
//! fans them out — attenuated per row — to a tiled gallery grid.
//!
//! # Key entry points
//!
//! - [`engine::GalleryEngine`] - the engine owning the whole pipeline
//! - [`grid::RowSurface`] - the seam a host implements to receive row
//!   transforms
//! - [`options::Options`] - runtime configuration with TOML preset support
//! - [`effects::EffectMapper`] - the pure pointer-to-effect curves
//!
//! # Architecture
//!
//! Pointer events land in a single-slot, newest-wins sample buffer and do
//! nothing else; the host-driven frame loop drains at most one sample per
//! throttle window, maps it into target values, moves the rendered values
//! one exponential-smoothing step, and writes per-row transforms. The loop
//! asks for frames only while values are still chasing their target or the
//! pointer was active within the stop delay, so an idle page schedules no
//! work at all.
//!
//! The crate is host-agnostic: anything that can report pointer/resize
//! events and run a per-frame callback can drive it. An optional `winit`
//! feature converts winit window events directly.

pub mod animation;
pub mod effects;
pub mod engine;
mod error;
pub mod grid;
pub mod input;
pub mod options;
pub mod viewport;

pub use error::TiltgridError;
