//! The gallery engine: wiring, lifecycle, and the per-frame drive loop.
//!
//! [`GalleryEngine`] owns the whole pipeline — viewport tracker, pointer
//! sampler, effect mapper, smoother, and row applier — plus the row list
//! itself, acquired at mount and released at unmount. The host feeds it
//! events and calls [`tick`](GalleryEngine::tick) once per frame for as
//! long as the engine asks for frames.

use glam::Vec2;
use web_time::Instant;

use crate::animation::EffectSmoother;
use crate::effects::{EffectMapper, EffectValues};
use crate::error::TiltgridError;
use crate::grid::{RowApplier, RowSurface};
use crate::input::{InputEvent, PointerSampler};
use crate::options::Options;
use crate::viewport::{ViewportSize, ViewportTracker};

/// Pointer-reactive animation engine for a tiled gallery grid.
///
/// All methods take the current time as a parameter rather than reading a
/// clock, so hosts with their own frame timestamps (and tests) stay in
/// control of time.
#[derive(Debug)]
pub struct GalleryEngine<R: RowSurface> {
    mapper: EffectMapper,
    sampler: PointerSampler,
    smoother: EffectSmoother,
    applier: RowApplier,
    viewport: ViewportTracker,
    rows: Option<Vec<R>>,
    last_pointer: Option<Vec2>,
}

impl<R: RowSurface> GalleryEngine<R> {
    /// Create an engine from validated options and the initial viewport
    /// size.
    pub fn new(
        options: &Options,
        viewport: ViewportSize,
    ) -> Result<Self, TiltgridError> {
        options.validate()?;
        Ok(Self {
            mapper: EffectMapper::new(options.effects.clone()),
            sampler: PointerSampler::new(options.smoothing.throttle_delay()),
            smoother: EffectSmoother::new(&options.smoothing),
            applier: RowApplier::new(&options.grid),
            viewport: ViewportTracker::new(
                viewport,
                options.viewport.resize_debounce(),
            ),
            rows: None,
            last_pointer: None,
        })
    }

    /// Acquire the row list and start tracking.
    ///
    /// An empty list is fine — the applier skips writes for it.
    pub fn mount(&mut self, rows: Vec<R>) {
        log::debug!("gallery mounted with {} rows", rows.len());
        self.applier.reset();
        self.rows = Some(rows);
    }

    /// Stop tracking and hand the rows back.
    ///
    /// Synchronously halts the loop and discards the pending sample, so a
    /// frame callback or pointer event landing after this mutates nothing.
    pub fn unmount(&mut self) -> Option<Vec<R>> {
        log::debug!("gallery unmounted");
        self.smoother.stop();
        self.sampler.reset();
        self.rows.take()
    }

    /// Whether a row list is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.rows.is_some()
    }

    /// Route a platform event into the pipeline.
    ///
    /// Returns `true` when the host must (re)start its frame loop.
    pub fn handle_event(&mut self, event: InputEvent, now: Instant) -> bool {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.pointer_moved(Vec2::new(x, y), now)
            }
            InputEvent::Resized { width, height } => {
                self.resized(ViewportSize::new(width, height), now);
                false
            }
        }
    }

    /// Record a pointer movement.
    ///
    /// Never blocks and never interpolates — it stores the newest sample
    /// and wakes the loop. Returns `true` when the loop was idle, i.e. the
    /// host must start scheduling frames again. While unmounted this is a
    /// no-op.
    pub fn pointer_moved(&mut self, position: Vec2, now: Instant) -> bool {
        if self.rows.is_none() {
            return false;
        }
        let was_idle = !self.smoother.is_animating();
        self.last_pointer = Some(position);
        self.sampler.push(position, now);
        self.smoother.note_activity(now);
        if was_idle {
            log::trace!("pointer activity resumed animation");
        }
        was_idle
    }

    /// Record a viewport resize. Debounced; the committed size lands on a
    /// later tick. Tracked even while unmounted so a remount maps against
    /// the current size.
    pub fn resized(&mut self, size: ViewportSize, now: Instant) {
        self.viewport.resized(size, now);
    }

    /// Advance one frame: commit any due resize, drain at most one pointer
    /// sample into a new target, move the rendered values one smoothing
    /// step, and fan them out to the rows.
    ///
    /// All row writes for the frame happen inside this single call, so
    /// rows can never show a torn mix of two frames. Returns whether
    /// another frame is wanted; after teardown it is a no-op returning
    /// `false`.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(rows) = self.rows.as_mut() else {
            return false;
        };

        // Resize commits must precede sample mapping so a fresh sample is
        // never mapped against a stale width.
        let _ = self.viewport.poll(now);

        if let Some(sample) = self.sampler.take_due(now) {
            let mapped = self
                .mapper
                .map(sample.position.x, self.viewport.size().width);
            self.smoother.set_target(mapped, sample.timestamp);
        }

        let animating = self.smoother.tick(now);
        let _ = self.applier.apply(&self.smoother.rendered(), rows);
        animating
    }

    /// The smoothed values currently applied to the grid.
    pub fn rendered_values(&self) -> EffectValues {
        self.smoother.rendered()
    }

    /// The instantaneous target from the latest processed sample.
    pub fn mapped_values(&self) -> EffectValues {
        self.smoother.mapped()
    }

    /// The last observed raw pointer position, if any.
    pub fn pointer_position(&self) -> Option<Vec2> {
        self.last_pointer
    }

    /// The current committed viewport size.
    pub fn viewport_size(&self) -> ViewportSize {
        self.viewport.size()
    }

    /// Whether the frame loop should be running.
    pub fn is_animating(&self) -> bool {
        self.smoother.is_animating()
    }
}
