use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the per-row multiplier behaves for rows far from the center.
///
/// With a large row count, `1 - offset * factor` goes negative past
/// `1 / factor` rows from the center. `Clamped` floors the multiplier at
/// zero so far rows simply stop moving; `Unclamped` keeps the raw value,
/// which makes far rows move against the pointer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RowFalloff {
    /// Floor the multiplier at zero.
    #[default]
    Clamped,
    /// Keep the raw multiplier, negative values included.
    Unclamped,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Grid", inline)]
#[serde(default)]
/// Per-row attenuation and write-amortization parameters.
pub struct GridOptions {
    /// How much the translation multiplier drops per row of distance from
    /// the center row.
    #[schemars(title = "Row Multiplier Factor", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub row_multiplier_factor: f32,
    /// Minimum per-channel change since the last applied values before
    /// row writes happen at all.
    #[schemars(title = "Change Threshold", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub change_threshold: f32,
    /// Behavior of the multiplier for rows far from the center.
    pub row_falloff: RowFalloff,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            row_multiplier_factor: 0.3,
            change_threshold: 0.5,
            row_falloff: RowFalloff::default(),
        }
    }
}
