//! TOPSIS - Technique for Order Preference by Similarity to Ideal Solution.

use super::{validate_inputs, ScoringMethod};
use crate::domain::distance::{DistanceMetric, Euclidean};
use crate::domain::foundation::{
    CriteriaWeights, CriterionType, DecisionMatrix, DegeneratePolicy, McdaError, SortOrder,
};
use crate::domain::normalization::{column_max, column_min, MinMaxNormalization, Normalization};

/// Relative closeness to the ideal solution. Higher is better.
///
/// # Algorithm
/// 1. Normalize with the configured strategy (larger is better afterwards)
/// 2. Multiply each column by its weight
/// 3. Ideal = column maxima, anti-ideal = column minima
/// 4. Measure every alternative against both with the configured metric
/// 5. Score = d⁻ / (d⁺ + d⁻)
///
/// # Edge Cases
/// - `d⁺ + d⁻ == 0`: `CoincidentReference` under the strict policy, `NaN`
///   otherwise
#[derive(Debug)]
pub struct Topsis {
    normalization: Box<dyn Normalization>,
    distance: Box<dyn DistanceMetric>,
    policy: DegeneratePolicy,
}

impl Topsis {
    /// Creates TOPSIS with the given strategies and the strict policy.
    pub fn new(
        normalization: impl Normalization + 'static,
        distance: impl DistanceMetric + 'static,
    ) -> Self {
        Self::from_boxed(Box::new(normalization), Box::new(distance))
    }

    /// Creates TOPSIS from already boxed strategies.
    pub fn from_boxed(
        normalization: Box<dyn Normalization>,
        distance: Box<dyn DistanceMetric>,
    ) -> Self {
        Self {
            normalization,
            distance,
            policy: DegeneratePolicy::Strict,
        }
    }

    /// Sets how a zero closeness denominator is surfaced.
    ///
    /// This only governs step 5; the normalization strategy carries its own
    /// policy.
    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured normalization strategy.
    pub fn normalization(&self) -> &dyn Normalization {
        self.normalization.as_ref()
    }

    /// The configured distance metric.
    pub fn distance(&self) -> &dyn DistanceMetric {
        self.distance.as_ref()
    }
}

impl Default for Topsis {
    fn default() -> Self {
        Self::new(MinMaxNormalization::new(), Euclidean)
    }
}

impl ScoringMethod for Topsis {
    fn name(&self) -> &str {
        "topsis"
    }

    fn preference_order(&self) -> SortOrder {
        SortOrder::Descending
    }

    fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &CriteriaWeights,
        types: &[CriterionType],
    ) -> Result<Vec<f64>, McdaError> {
        validate_inputs(matrix, weights, types)?;
        tracing::debug!(
            normalization = self.normalization.name(),
            distance = self.distance.name(),
            alternatives = matrix.alternatives(),
            criteria = matrix.criteria(),
            "Scoring with TOPSIS"
        );

        let normalized = self.normalization.normalize(matrix, types)?;
        let weighted = normalized.scale_columns(weights.as_slice())?;

        let (ideal, anti_ideal): (Vec<f64>, Vec<f64>) = (0..weighted.criteria())
            .map(|j| {
                let column = weighted.column(j);
                (column_max(&column), column_min(&column))
            })
            .unzip();

        weighted
            .rows()
            .enumerate()
            .map(|(alternative, row)| {
                let to_ideal = self.distance.distance(row, &ideal);
                let to_anti_ideal = self.distance.distance(row, &anti_ideal);
                let total = to_ideal + to_anti_ideal;
                self.policy.check(total == 0.0, || {
                    McdaError::CoincidentReference { alternative }
                })?;
                Ok(to_anti_ideal / total)
            })
            .collect()
    }
}
