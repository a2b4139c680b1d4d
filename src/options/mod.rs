//! Centralized engine options with TOML preset support.
//!
//! All tweakable settings (effect curves, smoothing cadence, grid
//! attenuation, viewport tracking) are consolidated here. Options serialize
//! to/from TOML for presets, and every struct carries a JSON schema so
//! hosts can generate settings UIs.

mod effects;
mod grid;
mod smoothing;
mod viewport;

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use effects::EffectOptions;
pub use grid::{GridOptions, RowFalloff};
pub use smoothing::SmoothingOptions;
pub use viewport::ViewportOptions;

use crate::error::TiltgridError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[smoothing]`) work correctly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Pointer-to-effect curve constants.
    pub effects: EffectOptions,
    /// Interpolation and sampling cadence.
    pub smoothing: SmoothingOptions,
    /// Per-row attenuation and write amortization.
    pub grid: GridOptions,
    /// Viewport tracking.
    pub viewport: ViewportOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TiltgridError> {
        let content = std::fs::read_to_string(path)?;
        let options: Self = toml::from_str(&content).map_err(|e| {
            TiltgridError::OptionsParse(format!("{}: {e}", path.display()))
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TiltgridError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TiltgridError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check every value for internal consistency.
    ///
    /// The interpolation factor must be in `(0, 1]` — zero would never
    /// converge and values above one overshoot. Thresholds and exponents
    /// must keep the settle and falloff math well-defined. Zero delays are
    /// valid: a zero throttle means unthrottled sampling, a zero debounce
    /// commits resizes on the next poll.
    pub fn validate(&self) -> Result<(), TiltgridError> {
        let s = &self.smoothing;
        if !(s.lerp_factor > 0.0 && s.lerp_factor <= 1.0) {
            return Err(TiltgridError::InvalidOptions(format!(
                "lerp_factor must be in (0, 1], got {}",
                s.lerp_factor
            )));
        }
        if s.lerp_threshold <= 0.0 {
            return Err(TiltgridError::InvalidOptions(format!(
                "lerp_threshold must be positive, got {}",
                s.lerp_threshold
            )));
        }
        let e = &self.effects;
        if e.contrast_exponent <= 0.0 || e.brightness_exponent <= 0.0 {
            return Err(TiltgridError::InvalidOptions(format!(
                "falloff exponents must be positive, got contrast {} / brightness {}",
                e.contrast_exponent, e.brightness_exponent
            )));
        }
        let g = &self.grid;
        if g.row_multiplier_factor < 0.0 {
            return Err(TiltgridError::InvalidOptions(format!(
                "row_multiplier_factor must be non-negative, got {}",
                g.row_multiplier_factor
            )));
        }
        if g.change_threshold < 0.0 {
            return Err(TiltgridError::InvalidOptions(format!(
                "change_threshold must be non-negative, got {}",
                g.change_threshold
            )));
        }
        Ok(())
    }

    /// JSON schema for the full options tree, for host settings UIs.
    pub fn schema_json() -> Result<String, TiltgridError> {
        let schema = schemars::schema_for!(Options);
        serde_json::to_string_pretty(&schema)
            .map_err(|e| TiltgridError::OptionsParse(e.to_string()))
    }
}
