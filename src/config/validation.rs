//! Input validation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::{CriteriaWeights, McdaError, DEFAULT_WEIGHT_TOLERANCE};

/// Upper bound for the weight-sum tolerance
const MAX_WEIGHT_TOLERANCE: f64 = 0.1;

/// Validation settings
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ValidationConfig {
    /// Allowed deviation of the weight sum from 1
    #[serde(default = "default_weight_tolerance")]
    pub weight_tolerance: f64,
}

impl ValidationConfig {
    /// Validates weights against the configured tolerance.
    pub fn weights(&self, weights: Vec<f64>) -> Result<CriteriaWeights, McdaError> {
        CriteriaWeights::with_tolerance(weights, self.weight_tolerance)
    }

    /// Validate validation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let t = self.weight_tolerance;
        if !(t > 0.0 && t <= MAX_WEIGHT_TOLERANCE) {
            return Err(ValidationError::InvalidWeightTolerance(t));
        }
        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            weight_tolerance: default_weight_tolerance(),
        }
    }
}

fn default_weight_tolerance() -> f64 {
    DEFAULT_WEIGHT_TOLERANCE
}
