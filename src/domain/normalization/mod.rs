//! Normalization strategies.
//!
//! Every strategy rescales each column independently using only that
//! column's values and its direction marker. The output convention is
//! uniform: after normalization a larger value is always better, cost
//! columns having been inverted internally. Downstream scoring relies on
//! this and never inspects criterion direction again.
//!
//! # Strategies
//!
//! - `VectorNormalization` - divide by the column's Euclidean norm
//! - `MinMaxNormalization` - rescale onto `[0, 1]` using min and max
//! - `MaxNormalization` - divide by the column maximum
//! - `LinearNormalization` - `x / max` for benefit, `min / x` for cost
//! - `SumNormalization` - distributive share of the column sum
//!
//! The ratio strategies (max, linear, sum) divide by a column statistic and
//! would reverse the order of a column holding negative values, so they
//! reject such columns with `NegativeEntry`. Vector and min-max accept any
//! finite input.

mod linear;
mod max;
mod min_max;
mod sum;
mod vector;

pub use linear::LinearNormalization;
pub use max::MaxNormalization;
pub use min_max::MinMaxNormalization;
pub use sum::SumNormalization;
pub use vector::VectorNormalization;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{CriterionType, DecisionMatrix, DegeneratePolicy, McdaError};

/// Column-wise rescaling of a decision matrix.
pub trait Normalization: fmt::Debug + Send + Sync {
    /// Short identifier used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Returns a new matrix of the same shape, each column rescaled so that
    /// larger is better.
    fn normalize(
        &self,
        matrix: &DecisionMatrix,
        types: &[CriterionType],
    ) -> Result<DecisionMatrix, McdaError>;
}

/// The built-in normalization strategies, selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationKind {
    Vector,
    #[default]
    MinMax,
    Max,
    Linear,
    Sum,
}

impl NormalizationKind {
    /// Builds the strategy with the given degenerate-input policy.
    pub fn build(&self, policy: DegeneratePolicy) -> Box<dyn Normalization> {
        match self {
            NormalizationKind::Vector => Box::new(VectorNormalization::with_policy(policy)),
            NormalizationKind::MinMax => Box::new(MinMaxNormalization::with_policy(policy)),
            NormalizationKind::Max => Box::new(MaxNormalization::with_policy(policy)),
            NormalizationKind::Linear => Box::new(LinearNormalization::with_policy(policy)),
            NormalizationKind::Sum => Box::new(SumNormalization::with_policy(policy)),
        }
    }
}

/// Applies `rescale` to every column after checking that `types` aligns
/// with the matrix columns.
pub(crate) fn normalize_columns<F>(
    matrix: &DecisionMatrix,
    types: &[CriterionType],
    mut rescale: F,
) -> Result<DecisionMatrix, McdaError>
where
    F: FnMut(usize, &[f64], CriterionType) -> Result<Vec<f64>, McdaError>,
{
    matrix.ensure_criteria(types.len(), "criteria types length")?;

    let mut columns = Vec::with_capacity(matrix.criteria());
    for (j, &kind) in types.iter().enumerate() {
        let column = matrix.column(j);
        columns.push(rescale(j, &column, kind)?);
    }

    Ok(DecisionMatrix::from_column_fn(
        matrix.alternatives(),
        matrix.criteria(),
        |j| std::mem::take(&mut columns[j]),
    ))
}

pub(crate) fn column_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub(crate) fn column_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Fails with `NegativeEntry` at the first value below zero.
pub(crate) fn ensure_non_negative(criterion: usize, values: &[f64]) -> Result<(), McdaError> {
    match values.iter().position(|&x| x < 0.0) {
        Some(alternative) => Err(McdaError::NegativeEntry {
            alternative,
            criterion,
            value: values[alternative],
        }),
        None => Ok(()),
    }
}
