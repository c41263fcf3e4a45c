//! Vector normalization.

use super::{normalize_columns, Normalization};
use crate::domain::foundation::{CriterionType, DecisionMatrix, DegeneratePolicy, McdaError};

/// Divides every entry by its column's Euclidean norm.
///
/// Cost columns are reported as `1 - x / norm` so that larger stays better.
/// A column of all zeros is degenerate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VectorNormalization {
    policy: DegeneratePolicy,
}

impl VectorNormalization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DegeneratePolicy) -> Self {
        Self { policy }
    }
}

impl Normalization for VectorNormalization {
    fn name(&self) -> &'static str {
        "vector"
    }

    fn normalize(
        &self,
        matrix: &DecisionMatrix,
        types: &[CriterionType],
    ) -> Result<DecisionMatrix, McdaError> {
        normalize_columns(matrix, types, |criterion, column, kind| {
            let norm = column.iter().fold(0.0_f64, |acc, &x| acc.hypot(x));
            self.policy.check(norm == 0.0, || McdaError::ZeroNorm {
                criterion,
            })?;

            Ok(column
                .iter()
                .map(|&x| match kind {
                    CriterionType::Benefit => x / norm,
                    CriterionType::Cost => 1.0 - x / norm,
                })
                .collect())
        })
    }
}
