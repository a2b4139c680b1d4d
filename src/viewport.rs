//! Debounced viewport size tracking.

use web_time::{Duration, Instant};

/// Current viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl ViewportSize {
    /// Create a size from width and height.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Tracks the viewport size with trailing-edge debouncing.
///
/// Resize events only record a pending size; [`poll`](Self::poll) commits
/// it once the debounce delay has elapsed since the *latest* event, so a
/// burst of resize events collapses into a single committed update.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    size: ViewportSize,
    pending: Option<(ViewportSize, Instant)>,
    debounce: Duration,
}

impl ViewportTracker {
    /// Create a tracker with an initial size and debounce delay.
    pub fn new(initial: ViewportSize, debounce: Duration) -> Self {
        Self {
            size: initial,
            pending: None,
            debounce,
        }
    }

    /// Record a resize event. Restarts the debounce window.
    pub fn resized(&mut self, size: ViewportSize, now: Instant) {
        self.pending = Some((size, now));
    }

    /// Commit a pending size if its debounce window has elapsed.
    ///
    /// Returns `true` when a new size was committed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some((size, at)) = self.pending else {
            return false;
        };
        if now.saturating_duration_since(at) < self.debounce {
            return false;
        }
        self.size = size;
        self.pending = None;
        log::trace!(
            "viewport committed at {}x{}",
            self.size.width,
            self.size.height
        );
        true
    }

    /// The current committed size.
    pub fn size(&self) -> ViewportSize {
        self.size
    }

    /// Whether a resize is waiting out its debounce window.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
