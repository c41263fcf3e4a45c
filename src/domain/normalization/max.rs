//! Maximum normalization.

use super::{column_max, ensure_non_negative, normalize_columns, Normalization};
use crate::domain::foundation::{CriterionType, DecisionMatrix, DegeneratePolicy, McdaError};

/// Benefit: `x / max`. Cost: `1 - x / max`.
///
/// Values must be non-negative; a column of zeros is degenerate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxNormalization {
    policy: DegeneratePolicy,
}

impl MaxNormalization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DegeneratePolicy) -> Self {
        Self { policy }
    }
}

impl Normalization for MaxNormalization {
    fn name(&self) -> &'static str {
        "max"
    }

    fn normalize(
        &self,
        matrix: &DecisionMatrix,
        types: &[CriterionType],
    ) -> Result<DecisionMatrix, McdaError> {
        normalize_columns(matrix, types, |criterion, column, kind| {
            ensure_non_negative(criterion, column)?;
            let max = column_max(column);
            self.policy.check(max == 0.0, || McdaError::ZeroMaximum {
                criterion,
            })?;

            Ok(column
                .iter()
                .map(|&x| match kind {
                    CriterionType::Benefit => x / max,
                    CriterionType::Cost => 1.0 - x / max,
                })
                .collect())
        })
    }
}
