//! Pearson correlation applied to rank vectors.

use super::ensure_same_length;
use crate::domain::foundation::McdaError;
use crate::ports::RankCorrelation;

/// Pearson's linear correlation coefficient. Handles tied ranks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PearsonCorrelation;

impl RankCorrelation for PearsonCorrelation {
    fn name(&self) -> &'static str {
        "pearson"
    }

    fn correlate(&self, a: &[usize], b: &[usize]) -> Result<f64, McdaError> {
        ensure_same_length(a, b)?;
        if a.is_empty() {
            return Err(McdaError::empty_input("ranking"));
        }

        let n = a.len() as f64;
        let mean_a = a.iter().sum::<usize>() as f64 / n;
        let mean_b = b.iter().sum::<usize>() as f64 / n;

        let mut covariance = 0.0;
        let mut var_a = 0.0;
        let mut var_b = 0.0;
        for (&x, &y) in a.iter().zip(b) {
            let dx = x as f64 - mean_a;
            let dy = y as f64 - mean_b;
            covariance += dx * dy;
            var_a += dx * dx;
            var_b += dy * dy;
        }

        if var_a == 0.0 {
            return Err(McdaError::ZeroVariance("a".into()));
        }
        if var_b == 0.0 {
            return Err(McdaError::ZeroVariance("b".into()));
        }

        Ok((covariance / (var_a * var_b).sqrt()).clamp(-1.0, 1.0))
    }
}
