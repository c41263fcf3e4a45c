//! Spearman rank correlation.

use super::ensure_same_length;
use crate::domain::foundation::McdaError;
use crate::ports::RankCorrelation;

/// `1 - 6 Σ d² / (n (n² - 1))`, exact for rankings without ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpearmanCorrelation;

impl RankCorrelation for SpearmanCorrelation {
    fn name(&self) -> &'static str {
        "spearman"
    }

    fn correlate(&self, a: &[usize], b: &[usize]) -> Result<f64, McdaError> {
        ensure_same_length(a, b)?;
        let n = a.len() as f64;
        if a.len() < 2 {
            return Err(McdaError::ZeroVariance("of fewer than two alternatives".into()));
        }

        let squared: f64 = a
            .iter()
            .zip(b)
            .map(|(&x, &y)| {
                let d = x as f64 - y as f64;
                d * d
            })
            .sum();

        Ok((1.0 - 6.0 * squared / (n * (n * n - 1.0))).clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn one_adjacent_swap() {
        let coeff = SpearmanCorrelation
            .correlate(&[1, 2, 3, 4, 5], &[1, 3, 2, 4, 5])
            .unwrap();
        assert!((coeff - 0.9).abs() < 1e-12);
    }

    #[test]
    fn identical_and_reversed_rankings() {
        let r = [1, 2, 3, 4];
        assert_eq!(SpearmanCorrelation.correlate(&r, &r).unwrap(), 1.0);
        assert_eq!(SpearmanCorrelation.correlate(&r, &[4, 3, 2, 1]).unwrap(), -1.0);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = SpearmanCorrelation.correlate(&[1, 2], &[1]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ShapeMismatch);
    }

    #[test]
    fn single_alternative_is_degenerate() {
        let err = SpearmanCorrelation.correlate(&[1], &[1]).unwrap_err();
        assert!(err.is_degenerate());
    }
}
