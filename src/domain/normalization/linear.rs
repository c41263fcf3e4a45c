//! Linear normalization.

use super::{column_max, column_min, ensure_non_negative, normalize_columns, Normalization};
use crate::domain::foundation::{CriterionType, DecisionMatrix, DegeneratePolicy, McdaError};

/// Benefit: `x / max`. Cost: `min / x`.
///
/// Values must be non-negative. A zero maximum on a benefit column, or any
/// zero entry on a cost column, is degenerate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearNormalization {
    policy: DegeneratePolicy,
}

impl LinearNormalization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DegeneratePolicy) -> Self {
        Self { policy }
    }
}

impl Normalization for LinearNormalization {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn normalize(
        &self,
        matrix: &DecisionMatrix,
        types: &[CriterionType],
    ) -> Result<DecisionMatrix, McdaError> {
        normalize_columns(matrix, types, |criterion, column, kind| {
            ensure_non_negative(criterion, column)?;
            match kind {
                CriterionType::Benefit => {
                    let max = column_max(column);
                    self.policy.check(max == 0.0, || McdaError::ZeroMaximum {
                        criterion,
                    })?;
                    Ok(column.iter().map(|&x| x / max).collect())
                }
                CriterionType::Cost => {
                    let zero_at = column.iter().position(|&x| x == 0.0);
                    self.policy.check(zero_at.is_some(), || McdaError::ZeroEntry {
                        alternative: zero_at.unwrap_or_default(),
                        criterion,
                    })?;
                    let min = column_min(column);
                    Ok(column.iter().map(|&x| min / x).collect())
                }
            }
        })
    }
}
