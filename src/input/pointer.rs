//! Throttled pointer sampling.
//!
//! Pointer-move events arrive far faster than they are worth processing.
//! The sampler is a single-slot, newest-wins buffer: the event side only
//! stores the latest sample, and the frame loop drains it at most once per
//! throttle window. Nothing here maps or interpolates.

use glam::Vec2;
use web_time::{Duration, Instant};

/// One observed pointer position at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Pointer position relative to the viewport, in pixels.
    pub position: Vec2,
    /// When the sample was observed.
    pub timestamp: Instant,
}

/// Single-slot pointer sample buffer with throttled draining.
#[derive(Debug, Clone)]
pub struct PointerSampler {
    throttle: Duration,
    pending: Option<PointerSample>,
    last_taken: Option<Instant>,
}

impl PointerSampler {
    /// Create a sampler. A zero `throttle` disables gating, so every
    /// frame drains whatever sample is pending.
    pub fn new(throttle: Duration) -> Self {
        Self {
            throttle,
            pending: None,
            last_taken: None,
        }
    }

    /// Record a pointer position. Overwrites any sample that has not been
    /// drained yet — only the newest position matters.
    pub fn push(&mut self, position: Vec2, now: Instant) {
        self.pending = Some(PointerSample {
            position,
            timestamp: now,
        });
    }

    /// Drain the pending sample if the throttle window has elapsed since
    /// the last drained one.
    pub fn take_due(&mut self, now: Instant) -> Option<PointerSample> {
        let sample = self.pending?;
        if let Some(last) = self.last_taken {
            if now.saturating_duration_since(last) < self.throttle {
                return None;
            }
        }
        self.last_taken = Some(now);
        self.pending = None;
        Some(sample)
    }

    /// Whether a sample is waiting to be drained.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Discard any pending sample and throttle state.
    pub fn reset(&mut self) {
        self.pending = None;
        self.last_taken = None;
    }
}
