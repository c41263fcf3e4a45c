//! Distance metrics between two numeric vectors.
//!
//! A metric is symmetric, non-negative and zero iff both vectors are
//! equal. Scoring methods hold one by composition and never depend on
//! which concrete metric they were given.

mod metrics;

pub use metrics::{Chebyshev, Euclidean, Manhattan};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::McdaError;

/// Distance between two equally sized vectors.
pub trait DistanceMetric: fmt::Debug + Send + Sync {
    /// Short identifier used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Computes the distance. Implementations may assume equal lengths;
    /// use [`distance_checked`] at untrusted boundaries.
    fn distance(&self, a: &[f64], b: &[f64]) -> f64;
}

/// Computes `metric.distance(a, b)` after checking both vectors have the
/// same length.
pub fn distance_checked(
    metric: &dyn DistanceMetric,
    a: &[f64],
    b: &[f64],
) -> Result<f64, McdaError> {
    if a.len() != b.len() {
        return Err(McdaError::shape_mismatch("vector length", a.len(), b.len()));
    }
    Ok(metric.distance(a, b))
}

/// The built-in distance metrics, selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceKind {
    #[default]
    Euclidean,
    Manhattan,
    Chebyshev,
}

impl DistanceKind {
    /// Builds the metric.
    pub fn build(&self) -> Box<dyn DistanceMetric> {
        match self {
            DistanceKind::Euclidean => Box::new(Euclidean),
            DistanceKind::Manhattan => Box::new(Manhattan),
            DistanceKind::Chebyshev => Box::new(Chebyshev),
        }
    }
}
