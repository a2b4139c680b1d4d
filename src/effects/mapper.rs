//! Pointer-to-effect mapping curves.
//!
//! Pure functions from a horizontal pointer coordinate and the viewport
//! width to the five effect channels. Translation and skew are odd (signed)
//! functions of the centered position; contrast, scale, and brightness are
//! even falloffs from the center.

use crate::effects::EffectValues;
use crate::options::EffectOptions;

/// Maps a pointer X coordinate into target effect values.
///
/// Stateless apart from the captured curve constants; the same inputs
/// always give the same outputs.
#[derive(Debug, Clone)]
pub struct EffectMapper {
    opts: EffectOptions,
}

impl EffectMapper {
    /// Create a mapper with the given curve constants.
    pub fn new(opts: EffectOptions) -> Self {
        Self { opts }
    }

    /// The curve constants in use.
    pub fn options(&self) -> &EffectOptions {
        &self.opts
    }

    /// Compute target effect values for a pointer at `x` in a viewport of
    /// `width` pixels.
    ///
    /// The position is normalized to `t = (x / width) * 2 - 1`, so `t = 0`
    /// at the center and `t = ±1` at the edges. A viewport with
    /// `width <= 0` cannot be normalized and yields
    /// [`EffectValues::NEUTRAL`] instead of dividing by zero.
    #[must_use]
    pub fn map(&self, x: f32, width: f32) -> EffectValues {
        if width <= 0.0 {
            return EffectValues::NEUTRAL;
        }

        let t = (x / width) * 2.0 - 1.0;
        let m = t.abs();
        let o = &self.opts;

        EffectValues {
            translate_x: t * o.translate_multiplier * width / 100.0,
            skew_x: t * o.max_skew_angle,
            contrast: o.center_contrast
                - m.powf(o.contrast_exponent) * (o.center_contrast - o.edge_contrast),
            scale: o.center_scale - m * (o.center_scale - o.edge_scale),
            brightness: o.center_brightness
                - m.powf(o.brightness_exponent) * (o.center_brightness - o.edge_brightness),
        }
    }
}

impl Default for EffectMapper {
    fn default() -> Self {
        Self::new(EffectOptions::default())
    }
}
