//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, direction markers, policies and error types
//! that form the vocabulary of every scoring and ranking operation.

mod criterion_type;
mod decision_matrix;
mod errors;
mod policy;
mod ranking_matrix;
mod weights;

pub use criterion_type::CriterionType;
pub use decision_matrix::DecisionMatrix;
pub use errors::{ErrorCode, McdaError};
pub use policy::{DegeneratePolicy, SortOrder};
pub use ranking_matrix::{PreferenceMatrix, RankingMatrix};
pub use weights::{CriteriaWeights, DEFAULT_WEIGHT_TOLERANCE};
