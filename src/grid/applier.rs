//! Fans rendered effect values out to the gallery rows.
//!
//! Each row gets the shared filter channels and a translation attenuated
//! by its distance from the center row. Writes are amortized: when nothing
//! moved past the change threshold since the last applied values, the
//! whole pass is skipped and no row is touched.

use crate::effects::EffectValues;
use crate::grid::row::{RowSurface, RowTransform};
use crate::options::{GridOptions, RowFalloff};

/// Applies per-row transforms derived from the rendered effect values.
#[derive(Debug, Clone)]
pub struct RowApplier {
    factor: f32,
    falloff: RowFalloff,
    change_threshold: f32,
    last_applied: Option<EffectValues>,
}

impl RowApplier {
    /// Create an applier with the given attenuation parameters.
    pub fn new(opts: &GridOptions) -> Self {
        Self {
            factor: opts.row_multiplier_factor,
            falloff: opts.row_falloff,
            change_threshold: opts.change_threshold,
            last_applied: None,
        }
    }

    /// Attenuation multiplier for the row at `index` in a grid of
    /// `row_count` rows.
    ///
    /// The center row (`row_count / 2`, floored) gets `1.0`; each row of
    /// distance drops the multiplier by the configured factor. Whether the
    /// value may go negative for far rows depends on the falloff mode.
    #[must_use]
    pub fn row_multiplier(&self, index: usize, row_count: usize) -> f32 {
        let center = (row_count / 2) as f32;
        let offset = (index as f32 - center).abs();
        let raw = 1.0 - offset * self.factor;
        match self.falloff {
            RowFalloff::Clamped => raw.max(0.0),
            RowFalloff::Unclamped => raw,
        }
    }

    /// Write `values` to every row, unless nothing changed enough to
    /// matter. Returns the number of rows written.
    ///
    /// The change check runs on the channels a row write actually carries
    /// (translation, brightness, contrast); a pass is skipped only when
    /// all of them stayed within the threshold of the last applied values.
    pub fn apply<R: RowSurface>(
        &mut self,
        values: &EffectValues,
        rows: &mut [R],
    ) -> usize {
        if rows.is_empty() {
            return 0;
        }

        if let Some(prev) = &self.last_applied {
            let significant = (values.translate_x - prev.translate_x).abs()
                > self.change_threshold
                || (values.brightness - prev.brightness).abs()
                    > self.change_threshold
                || (values.contrast - prev.contrast).abs()
                    > self.change_threshold;
            if !significant {
                return 0;
            }
        }
        self.last_applied = Some(*values);

        let count = rows.len();
        for (i, row) in rows.iter_mut().enumerate() {
            let multiplier = self.row_multiplier(i, count);
            row.apply(&RowTransform {
                translate_x: values.translate_x * multiplier,
                brightness: values.brightness,
                contrast: values.contrast,
            });
        }
        count
    }

    /// Forget the last applied values so the next pass always writes.
    pub fn reset(&mut self) {
        self.last_applied = None;
    }
}
