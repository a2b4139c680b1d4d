//! Gallery grid: the row surface seam and the per-row effect applier.

mod applier;
mod row;

pub use applier::RowApplier;
pub use row::{RowSurface, RowTransform};
