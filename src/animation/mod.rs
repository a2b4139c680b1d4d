//! Animation loop state: per-frame smoothing of effect values.

mod smoother;

pub use smoother::EffectSmoother;
