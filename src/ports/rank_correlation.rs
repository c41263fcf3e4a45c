//! RankCorrelation port - Interface for comparing two rankings.
//!
//! The scoring core never depends on how agreement between rankings is
//! measured; callers plug in a coefficient through this port.

use crate::domain::foundation::McdaError;

/// Port for correlation coefficients between two rank vectors.
///
/// Implementations must ensure:
/// - The result lies in `[-1, 1]`, `1` meaning identical orderings
/// - The coefficient is symmetric in its arguments
/// - Length mismatches are reported as `ShapeMismatch`
pub trait RankCorrelation: Send + Sync {
    /// Short identifier that labels ensemble correlation tables.
    fn name(&self) -> &'static str;

    /// Correlation between rank vectors `a` and `b`.
    fn correlate(&self, a: &[usize], b: &[usize]) -> Result<f64, McdaError>;
}
