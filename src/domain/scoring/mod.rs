//! Scoring methods - decision matrix to preference vector.
//!
//! A scoring method is configured with strategy objects (normalization,
//! distance) and then invoked as a pure function over the decision matrix,
//! weights and criteria types. New methods plug in by implementing
//! [`ScoringMethod`] and reusing the same strategies.

mod topsis;

pub use topsis::Topsis;

use std::fmt;

use crate::domain::foundation::{
    CriteriaWeights, CriterionType, DecisionMatrix, McdaError, SortOrder,
};
use crate::domain::ranking::rank_preferences;

/// A multi-criteria scoring procedure.
pub trait ScoringMethod: fmt::Debug + Send + Sync {
    /// Short identifier used in logs and ensemble outcomes.
    fn name(&self) -> &str;

    /// Which direction of the preference vector is better.
    fn preference_order(&self) -> SortOrder;

    /// Computes one preference score per alternative.
    fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &CriteriaWeights,
        types: &[CriterionType],
    ) -> Result<Vec<f64>, McdaError>;

    /// Scores the matrix and converts the scores into ranks using this
    /// method's preference direction.
    fn rank(
        &self,
        matrix: &DecisionMatrix,
        weights: &CriteriaWeights,
        types: &[CriterionType],
    ) -> Result<Vec<usize>, McdaError> {
        let preferences = self.score(matrix, weights, types)?;
        Ok(rank_preferences(&preferences, self.preference_order()))
    }
}

/// Checks that weights and criteria types align with the matrix columns.
pub fn validate_inputs(
    matrix: &DecisionMatrix,
    weights: &CriteriaWeights,
    types: &[CriterionType],
) -> Result<(), McdaError> {
    matrix.ensure_criteria(weights.len(), "weights length")?;
    matrix.ensure_criteria(types.len(), "criteria types length")?;
    Ok(())
}
