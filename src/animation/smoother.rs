//! Per-frame smoothing of effect values toward their pointer-derived
//! target.
//!
//! The smoother is a two-phase state machine. While `Animating`, each tick
//! moves the rendered values a fixed fraction of the way to the mapped
//! target (exponential smoothing). Once every channel is within the settle
//! threshold *and* the pointer has been quiet past the stop delay, the
//! machine drops to `Idle` and reports that no further frames are needed.
//! Any pointer activity flips it straight back to `Animating`.

use web_time::{Duration, Instant};

use crate::effects::EffectValues;
use crate::options::SmoothingOptions;

/// Phase of the smoothing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No frames are scheduled; rendered values are at rest.
    Idle,
    /// A frame loop is running and rendered values chase the target.
    Animating,
}

/// Continuously interpolated effect state.
///
/// The smoother is the sole writer of the rendered values. All timing is
/// injected through `Instant` parameters, so behavior is deterministic
/// under test.
#[derive(Debug, Clone)]
pub struct EffectSmoother {
    mapped: EffectValues,
    rendered: EffectValues,
    phase: Phase,
    last_activity: Option<Instant>,
    lerp_factor: f32,
    lerp_threshold: f32,
    stop_delay: Duration,
}

impl EffectSmoother {
    /// Create a smoother at rest on neutral values.
    pub fn new(opts: &SmoothingOptions) -> Self {
        Self {
            mapped: EffectValues::NEUTRAL,
            rendered: EffectValues::NEUTRAL,
            phase: Phase::Idle,
            last_activity: None,
            lerp_factor: opts.lerp_factor,
            lerp_threshold: opts.lerp_threshold,
            stop_delay: opts.stop_delay(),
        }
    }

    /// Install a new target and (re)enter the animating phase.
    ///
    /// Only records state — interpolation happens exclusively in
    /// [`tick`](Self::tick), never synchronously on an event.
    pub fn set_target(&mut self, mapped: EffectValues, at: Instant) {
        self.mapped = mapped;
        self.last_activity = Some(at);
        self.phase = Phase::Animating;
    }

    /// Record pointer activity without changing the target.
    ///
    /// Keeps the idle-stop delay honest for throttled-away events and
    /// resumes the loop when it had settled.
    pub fn note_activity(&mut self, at: Instant) {
        self.last_activity = Some(at);
        self.phase = Phase::Animating;
    }

    /// Advance one frame. Returns whether another frame is wanted.
    ///
    /// While idle this is a no-op returning `false`, so a host that only
    /// schedules frames on `true` gets a self-terminating loop for free.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }

        self.rendered = self.rendered.lerp(&self.mapped, self.lerp_factor);

        let settled = self.rendered.within(&self.mapped, self.lerp_threshold);
        let quiet = self.last_activity.is_none_or(|at| {
            now.saturating_duration_since(at) >= self.stop_delay
        });

        if settled && quiet {
            self.phase = Phase::Idle;
            log::trace!("effect smoothing settled");
            return false;
        }
        true
    }

    /// The smoothed values currently driving visuals.
    pub fn rendered(&self) -> EffectValues {
        self.rendered
    }

    /// The instantaneous target computed from the latest processed sample.
    pub fn mapped(&self) -> EffectValues {
        self.mapped
    }

    /// Whether the frame loop should be running.
    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Animating
    }

    /// Force the machine idle without touching values. Used on teardown.
    pub fn stop(&mut self) {
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smoother() -> EffectSmoother {
        EffectSmoother::new(&SmoothingOptions::default())
    }

    fn edge_target() -> EffectValues {
        EffectValues {
            translate_x: 400.0,
            skew_x: 3.0,
            contrast: 330.0,
            scale: 0.95,
            brightness: 50.0,
        }
    }

    #[test]
    fn test_starts_idle_on_neutral() {
        let s = smoother();
        assert!(!s.is_animating());
        assert_eq!(s.rendered(), EffectValues::NEUTRAL);
        assert_eq!(s.mapped(), EffectValues::NEUTRAL);
    }

    #[test]
    fn test_set_target_does_not_move_rendered() {
        let start = Instant::now();
        let mut s = smoother();

        s.set_target(edge_target(), start);
        assert!(s.is_animating());
        // Interpolation only happens inside tick
        assert_eq!(s.rendered(), EffectValues::NEUTRAL);
    }

    #[test]
    fn test_tick_moves_a_fixed_fraction() {
        let start = Instant::now();
        let mut s = smoother();
        s.set_target(edge_target(), start);

        assert!(s.tick(start));
        assert!((s.rendered().translate_x - 40.0).abs() < 1e-3);
        assert!((s.rendered().brightness - 95.0).abs() < 1e-3);
    }

    #[test]
    fn test_convergence_is_monotone_and_bounded() {
        let start = Instant::now();
        let mut s = smoother();
        s.set_target(edge_target(), start);

        // Tick far past the stop delay so only the settle threshold
        // keeps the loop alive.
        let late = start + Duration::from_secs(10);
        let mut prev_delta = s.rendered().max_delta(&s.mapped());
        let mut steps = 0;
        while s.tick(late) {
            let delta = s.rendered().max_delta(&s.mapped());
            assert!(delta < prev_delta, "delta grew at step {steps}");
            prev_delta = delta;
            steps += 1;
            assert!(steps < 200, "failed to settle");
        }

        assert!(!s.is_animating());
        assert!(s.rendered().within(&s.mapped(), 0.01));
        // 400px gap shrinking by 0.9 per step needs ~101 steps to
        // reach 0.01
        assert!(steps > 90);
    }

    #[test]
    fn test_stop_delay_keeps_loop_alive_when_settled() {
        let start = Instant::now();
        let mut opts = SmoothingOptions::default();
        opts.lerp_factor = 1.0; // settle in one step
        let mut s = EffectSmoother::new(&opts);

        s.set_target(edge_target(), start);

        // Settled after one tick, but activity was 10ms ago — keep going
        assert!(s.tick(start + Duration::from_millis(10)));
        assert!(s.is_animating());

        // Past the 100ms stop delay the loop ends
        assert!(!s.tick(start + Duration::from_millis(120)));
        assert!(!s.is_animating());
    }

    #[test]
    fn test_activity_resumes_idle_loop() {
        let start = Instant::now();
        let mut s = smoother();
        s.set_target(EffectValues::NEUTRAL, start);
        let late = start + Duration::from_secs(1);
        assert!(!s.tick(late));
        assert!(!s.is_animating());

        s.note_activity(late);
        assert!(s.is_animating());
    }

    #[test]
    fn test_idle_tick_is_inert() {
        let start = Instant::now();
        let mut s = smoother();

        assert!(!s.tick(start));
        assert_eq!(s.rendered(), EffectValues::NEUTRAL);
    }

    #[test]
    fn test_stop_halts_without_snapping() {
        let start = Instant::now();
        let mut s = smoother();
        s.set_target(edge_target(), start);
        assert!(s.tick(start));
        let mid = s.rendered();

        s.stop();
        assert!(!s.is_animating());
        assert!(!s.tick(start + Duration::from_millis(16)));
        // Values stay wherever smoothing left them
        assert_eq!(s.rendered(), mid);
    }

    #[test]
    fn test_retarget_mid_flight_restarts_chase() {
        let start = Instant::now();
        let mut s = smoother();
        s.set_target(edge_target(), start);
        for i in 0..5 {
            let _ = s.tick(start + Duration::from_millis(16 * i));
        }

        // Pointer swings back to center
        s.set_target(
            EffectValues::NEUTRAL,
            start + Duration::from_millis(100),
        );
        let before = s.rendered().translate_x;
        assert!(s.tick(start + Duration::from_millis(116)));
        // Now pulling back toward zero
        assert!(s.rendered().translate_x < before);
    }
}
