//! Criterion direction marker (benefit vs. cost).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::McdaError;

/// Whether larger or smaller raw values are preferable for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum CriterionType {
    Cost = -1,
    Benefit = 1,
}

impl CriterionType {
    /// Creates a CriterionType from the conventional `+1 / -1` marker.
    pub fn try_from_i8(value: i8) -> Result<Self, McdaError> {
        match value {
            1 => Ok(CriterionType::Benefit),
            -1 => Ok(CriterionType::Cost),
            other => Err(McdaError::InvalidCriterionMarker(other)),
        }
    }

    /// Converts a slice of `+1 / -1` markers.
    pub fn from_markers(markers: &[i8]) -> Result<Vec<Self>, McdaError> {
        markers.iter().map(|&m| Self::try_from_i8(m)).collect()
    }

    /// Returns the numeric marker.
    pub fn value(&self) -> i8 {
        *self as i8
    }

    /// Returns true for benefit criteria.
    pub fn is_benefit(&self) -> bool {
        matches!(self, CriterionType::Benefit)
    }

    /// Returns true for cost criteria.
    pub fn is_cost(&self) -> bool {
        matches!(self, CriterionType::Cost)
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionType::Benefit => write!(f, "benefit"),
            CriterionType::Cost => write!(f, "cost"),
        }
    }
}
