//! Criteria weights value object.

use serde::{Deserialize, Serialize};

use super::McdaError;

/// Default tolerance when checking that weights sum to one.
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1e-6;

/// Non-negative criteria weights summing to one.
///
/// Scoring methods never re-normalize weights; they rely on this type
/// having been validated at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CriteriaWeights(Vec<f64>);

impl CriteriaWeights {
    /// Creates weights, checking sign and sum with the default tolerance.
    pub fn try_new(weights: Vec<f64>) -> Result<Self, McdaError> {
        Self::with_tolerance(weights, DEFAULT_WEIGHT_TOLERANCE)
    }

    /// Creates weights, checking sign and sum with the given tolerance.
    pub fn with_tolerance(weights: Vec<f64>, tolerance: f64) -> Result<Self, McdaError> {
        if weights.is_empty() {
            return Err(McdaError::empty_input("weights"));
        }

        for (criterion, &value) in weights.iter().enumerate() {
            if !value.is_finite() {
                return Err(McdaError::NonFiniteWeight { criterion, value });
            }
            if value < 0.0 {
                return Err(McdaError::NegativeWeight { criterion, value });
            }
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > tolerance {
            return Err(McdaError::WeightSum { sum, tolerance });
        }

        Ok(Self(weights))
    }

    /// Equal weights `1/n` for `n` criteria.
    pub fn equal(n: usize) -> Result<Self, McdaError> {
        if n == 0 {
            return Err(McdaError::empty_input("weights"));
        }
        Ok(Self(vec![1.0 / n as f64; n]))
    }

    /// Returns the weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated instance.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<f64>> for CriteriaWeights {
    type Error = McdaError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<CriteriaWeights> for Vec<f64> {
    fn from(weights: CriteriaWeights) -> Self {
        weights.0
    }
}
