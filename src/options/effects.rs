use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Effects", inline)]
#[serde(default)]
/// Pointer-to-effect curve constants.
///
/// Translation and skew are signed (odd) curves of the centered pointer
/// position; contrast, scale, and brightness fall off from their center
/// value toward their edge value as the pointer leaves the center.
pub struct EffectOptions {
    /// Translation strength as a percentage of viewport width.
    #[schemars(title = "Translate Multiplier", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub translate_multiplier: f32,
    /// Maximum skew angle in degrees, reached at the viewport edges.
    #[schemars(title = "Max Skew Angle", range(min = 0.0, max = 45.0), extend("step" = 0.5))]
    pub max_skew_angle: f32,
    /// Contrast percent when the pointer is at the center.
    #[schemars(title = "Center Contrast", range(min = 0.0, max = 500.0), extend("step" = 5.0))]
    pub center_contrast: f32,
    /// Contrast percent when the pointer is at an edge.
    #[schemars(title = "Edge Contrast", range(min = 0.0, max = 500.0), extend("step" = 5.0))]
    pub edge_contrast: f32,
    /// Falloff exponent for contrast (2 = quadratic).
    #[schemars(skip)]
    pub contrast_exponent: f32,
    /// Scale factor at the center.
    #[schemars(title = "Center Scale", range(min = 0.5, max = 1.5), extend("step" = 0.01))]
    pub center_scale: f32,
    /// Scale factor at an edge.
    #[schemars(title = "Edge Scale", range(min = 0.5, max = 1.5), extend("step" = 0.01))]
    pub edge_scale: f32,
    /// Brightness percent at the center.
    #[schemars(title = "Center Brightness", range(min = 0.0, max = 200.0), extend("step" = 5.0))]
    pub center_brightness: f32,
    /// Brightness percent at an edge.
    #[schemars(title = "Edge Brightness", range(min = 0.0, max = 200.0), extend("step" = 5.0))]
    pub edge_brightness: f32,
    /// Falloff exponent for brightness (1.5 = superlinear).
    #[schemars(skip)]
    pub brightness_exponent: f32,
}

impl Default for EffectOptions {
    fn default() -> Self {
        Self {
            translate_multiplier: 40.0,
            max_skew_angle: 3.0,
            center_contrast: 100.0,
            edge_contrast: 330.0,
            contrast_exponent: 2.0,
            center_scale: 1.0,
            edge_scale: 0.95,
            center_brightness: 100.0,
            edge_brightness: 50.0,
            brightness_exponent: 1.5,
        }
    }
}
