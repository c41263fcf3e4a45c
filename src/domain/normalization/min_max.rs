//! Min-max normalization.

use super::{column_max, column_min, normalize_columns, Normalization};
use crate::domain::foundation::{CriterionType, DecisionMatrix, DegeneratePolicy, McdaError};

/// Rescales every column onto `[0, 1]`.
///
/// Benefit: `(x - min) / (max - min)`. Cost: `(max - x) / (max - min)`.
/// A constant column (`max == min`) is degenerate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinMaxNormalization {
    policy: DegeneratePolicy,
}

impl MinMaxNormalization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DegeneratePolicy) -> Self {
        Self { policy }
    }
}

impl Normalization for MinMaxNormalization {
    fn name(&self) -> &'static str {
        "min_max"
    }

    fn normalize(
        &self,
        matrix: &DecisionMatrix,
        types: &[CriterionType],
    ) -> Result<DecisionMatrix, McdaError> {
        normalize_columns(matrix, types, |criterion, column, kind| {
            let (min, max) = (column_min(column), column_max(column));
            // A span beyond f64::MAX overflows; halve every operand instead.
            let scale = if (max - min).is_finite() { 1.0 } else { 0.5 };
            let (min, max) = (min * scale, max * scale);
            let range = max - min;
            self.policy.check(range == 0.0, || McdaError::ZeroRange {
                criterion,
            })?;

            Ok(column
                .iter()
                .map(|&x| match kind {
                    CriterionType::Benefit => (x * scale - min) / range,
                    CriterionType::Cost => (max - x * scale) / range,
                })
                .collect())
        })
    }
}
