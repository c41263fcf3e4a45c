//! Concrete distance metrics.

use super::DistanceMetric;

/// `sqrt(Σ (a_i - b_i)²)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn name(&self) -> &'static str {
        "euclidean"
    }

    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt()
    }
}

/// `Σ |a_i - b_i|`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl DistanceMetric for Manhattan {
    fn name(&self) -> &'static str {
        "manhattan"
    }

    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
    }
}

/// `max |a_i - b_i|`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl DistanceMetric for Chebyshev {
    fn name(&self) -> &'static str {
        "chebyshev"
    }

    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }
}
