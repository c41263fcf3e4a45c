//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Failures raised by scoring, normalization, rank conversion and
/// compromise aggregation.
///
/// Every variant is a precondition violation on a pure function; nothing is
/// retried and no partial result is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum McdaError {
    #[error("{what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("Criterion {criterion} has zero Euclidean norm")]
    ZeroNorm { criterion: usize },

    #[error("Criterion {criterion} has zero range (max == min)")]
    ZeroRange { criterion: usize },

    #[error("Criterion {criterion} has zero maximum")]
    ZeroMaximum { criterion: usize },

    #[error("Criterion {criterion} has zero column sum")]
    ZeroSum { criterion: usize },

    #[error("Criterion {criterion} contains a zero entry at alternative {alternative}, reciprocal is undefined")]
    ZeroEntry { alternative: usize, criterion: usize },

    #[error("Ranking {0} has zero variance, correlation is undefined")]
    ZeroVariance(String),

    #[error("Alternative {alternative} coincides with both the ideal and anti-ideal solution")]
    CoincidentReference { alternative: usize },

    #[error("Weight for criterion {criterion} is negative: {value}")]
    NegativeWeight { criterion: usize, value: f64 },

    #[error("Weight for criterion {criterion} is not a finite number: {value}")]
    NonFiniteWeight { criterion: usize, value: f64 },

    #[error("Weights must sum to 1 (tolerance {tolerance}), got {sum}")]
    WeightSum { sum: f64, tolerance: f64 },

    #[error("{what} must have exactly {expected} columns, got {actual}")]
    RoleMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("{what} cannot be empty")]
    EmptyInput { what: String },

    #[error("Entry ({row}, {column}) is not a finite number")]
    NonFinite { row: usize, column: usize },

    #[error("Criterion {criterion} holds {value} at alternative {alternative}, this normalization requires non-negative values")]
    NegativeEntry {
        alternative: usize,
        criterion: usize,
        value: f64,
    },

    #[error("Rank {rank} for alternative {alternative} in method {method} is outside 1..={max}")]
    RankOutOfRange {
        alternative: usize,
        method: usize,
        rank: usize,
        max: usize,
    },

    #[error("Invalid criterion type marker {0}, expected 1 (benefit) or -1 (cost)")]
    InvalidCriterionMarker(i8),
}

impl McdaError {
    /// Creates a shape mismatch error.
    pub fn shape_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        McdaError::ShapeMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Creates a role mismatch error for fixed-role inputs.
    pub fn role_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        McdaError::RoleMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Creates an empty input error.
    pub fn empty_input(what: impl Into<String>) -> Self {
        McdaError::EmptyInput { what: what.into() }
    }

    /// Returns the error category.
    pub fn code(&self) -> ErrorCode {
        match self {
            McdaError::ShapeMismatch { .. } => ErrorCode::ShapeMismatch,
            McdaError::ZeroNorm { .. }
            | McdaError::ZeroRange { .. }
            | McdaError::ZeroMaximum { .. }
            | McdaError::ZeroSum { .. }
            | McdaError::ZeroEntry { .. }
            | McdaError::ZeroVariance(_)
            | McdaError::CoincidentReference { .. } => ErrorCode::DegenerateInput,
            McdaError::NegativeWeight { .. }
            | McdaError::NonFiniteWeight { .. }
            | McdaError::WeightSum { .. } => ErrorCode::InvalidWeights,
            McdaError::RoleMismatch { .. } => ErrorCode::RoleMismatch,
            McdaError::EmptyInput { .. }
            | McdaError::NonFinite { .. }
            | McdaError::NegativeEntry { .. }
            | McdaError::RankOutOfRange { .. }
            | McdaError::InvalidCriterionMarker(_) => ErrorCode::InvalidInput,
        }
    }

    /// Returns true if this error signals degenerate numeric input.
    pub fn is_degenerate(&self) -> bool {
        self.code() == ErrorCode::DegenerateInput
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ShapeMismatch,
    DegenerateInput,
    InvalidWeights,
    RoleMismatch,
    InvalidInput,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::DegenerateInput => "DEGENERATE_INPUT",
            ErrorCode::InvalidWeights => "INVALID_WEIGHTS",
            ErrorCode::RoleMismatch => "ROLE_MISMATCH",
            ErrorCode::InvalidInput => "INVALID_INPUT",
        };
        write!(f, "{}", s)
    }
}
