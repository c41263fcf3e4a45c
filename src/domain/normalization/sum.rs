//! Sum (distributive) normalization.

use super::{ensure_non_negative, normalize_columns, Normalization};
use crate::domain::foundation::{CriterionType, DecisionMatrix, DegeneratePolicy, McdaError};

/// Expresses every entry as its share of the column total.
///
/// Benefit: `x / Σx`. Cost: `(1/x) / Σ(1/x)`. Each normalized column sums
/// to one. Values must be non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumNormalization {
    policy: DegeneratePolicy,
}

impl SumNormalization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DegeneratePolicy) -> Self {
        Self { policy }
    }
}

impl Normalization for SumNormalization {
    fn name(&self) -> &'static str {
        "sum"
    }

    fn normalize(
        &self,
        matrix: &DecisionMatrix,
        types: &[CriterionType],
    ) -> Result<DecisionMatrix, McdaError> {
        normalize_columns(matrix, types, |criterion, column, kind| {
            ensure_non_negative(criterion, column)?;
            let shares: Vec<f64> = match kind {
                CriterionType::Benefit => column.to_vec(),
                CriterionType::Cost => {
                    let zero_at = column.iter().position(|&x| x == 0.0);
                    self.policy.check(zero_at.is_some(), || McdaError::ZeroEntry {
                        alternative: zero_at.unwrap_or_default(),
                        criterion,
                    })?;
                    column.iter().map(|&x| 1.0 / x).collect()
                }
            };

            let total: f64 = shares.iter().sum();
            self.policy.check(total == 0.0, || McdaError::ZeroSum { criterion })?;

            Ok(shares.into_iter().map(|x| x / total).collect())
        })
    }
}
