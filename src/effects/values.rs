//! Five-channel effect value bundle.
//!
//! The same shape serves as both the mapped (target) state computed from the
//! latest pointer sample and the rendered (smoothed) state that actually
//! drives the grid.

/// Visual effect magnitudes derived from a pointer position.
///
/// `translate_x` is in pixels, `skew_x` in degrees, `contrast` and
/// `brightness` in percent, `scale` as a unitless factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectValues {
    /// Horizontal translation in pixels.
    pub translate_x: f32,
    /// Horizontal skew angle in degrees.
    pub skew_x: f32,
    /// Contrast in percent (100 = unchanged).
    pub contrast: f32,
    /// Uniform scale factor (1 = unchanged).
    pub scale: f32,
    /// Brightness in percent (100 = unchanged).
    pub brightness: f32,
}

impl EffectValues {
    /// Identity values: no translation, no skew, unchanged filter channels.
    ///
    /// This is both the initial state (pointer assumed at viewport center)
    /// and the mapping result for a degenerate zero-width viewport.
    pub const NEUTRAL: Self = Self {
        translate_x: 0.0,
        skew_x: 0.0,
        contrast: 100.0,
        scale: 1.0,
        brightness: 100.0,
    };

    /// Field-wise linear interpolation toward `target`.
    ///
    /// `t = 0` keeps `self`, `t = 1` reaches `target`. The smoothing loop
    /// calls this once per frame with a fixed factor, which yields
    /// exponential convergence — never a full replacement in one step.
    #[must_use]
    pub fn lerp(&self, target: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| (1.0 - t) * a + t * b;
        Self {
            translate_x: mix(self.translate_x, target.translate_x),
            skew_x: mix(self.skew_x, target.skew_x),
            contrast: mix(self.contrast, target.contrast),
            scale: mix(self.scale, target.scale),
            brightness: mix(self.brightness, target.brightness),
        }
    }

    /// Whether every channel is within `threshold` of `other`.
    #[must_use]
    pub fn within(&self, other: &Self, threshold: f32) -> bool {
        self.max_delta(other) <= threshold
    }

    /// Largest absolute per-channel difference from `other`.
    #[must_use]
    pub fn max_delta(&self, other: &Self) -> f32 {
        let deltas = [
            (self.translate_x - other.translate_x).abs(),
            (self.skew_x - other.skew_x).abs(),
            (self.contrast - other.contrast).abs(),
            (self.scale - other.scale).abs(),
            (self.brightness - other.brightness).abs(),
        ];
        deltas.into_iter().fold(0.0_f32, f32::max)
    }
}

impl Default for EffectValues {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_is_identity() {
        let n = EffectValues::NEUTRAL;
        assert_eq!(n.translate_x, 0.0);
        assert_eq!(n.skew_x, 0.0);
        assert_eq!(n.contrast, 100.0);
        assert_eq!(n.scale, 1.0);
        assert_eq!(n.brightness, 100.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = EffectValues::NEUTRAL;
        let b = EffectValues {
            translate_x: 400.0,
            skew_x: 3.0,
            contrast: 330.0,
            scale: 0.95,
            brightness: 50.0,
        };

        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_lerp_partial_step() {
        let a = EffectValues::NEUTRAL;
        let b = EffectValues {
            translate_x: 100.0,
            ..EffectValues::NEUTRAL
        };

        let stepped = a.lerp(&b, 0.1);
        assert!((stepped.translate_x - 10.0).abs() < 1e-5);
        // Untouched channels stay put
        assert_eq!(stepped.contrast, 100.0);
    }

    #[test]
    fn test_max_delta_picks_largest_channel() {
        let a = EffectValues::NEUTRAL;
        let b = EffectValues {
            translate_x: 2.0,
            skew_x: 0.5,
            contrast: 130.0,
            scale: 1.0,
            brightness: 101.0,
        };

        assert!((a.max_delta(&b) - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_within_threshold() {
        let a = EffectValues::NEUTRAL;
        let mut b = a;
        b.brightness += 0.005;

        assert!(a.within(&b, 0.01));
        b.brightness += 0.1;
        assert!(!a.within(&b, 0.01));
    }
}
