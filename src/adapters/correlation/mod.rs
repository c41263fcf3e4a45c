//! Correlation coefficient adapters for the `RankCorrelation` port.

mod pearson;
mod spearman;

pub use pearson::PearsonCorrelation;
pub use spearman::SpearmanCorrelation;

use crate::domain::foundation::McdaError;

/// Fails with `ShapeMismatch` unless both rankings have the same length.
fn ensure_same_length(a: &[usize], b: &[usize]) -> Result<(), McdaError> {
    if a.len() != b.len() {
        return Err(McdaError::shape_mismatch("ranking length", a.len(), b.len()));
    }
    Ok(())
}
