//! Domain layer containing the decision-analysis types and pure services.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (matrices, weights, criterion types, errors)
//! - `normalization` - Column rescaling strategies
//! - `distance` - Metrics between weighted alternatives and reference points
//! - `ranking` - Score to rank conversion
//! - `scoring` - Scoring methods (TOPSIS)
//! - `compromise` - Rank fusion aggregators

pub mod compromise;
pub mod distance;
pub mod foundation;
pub mod normalization;
pub mod ranking;
pub mod scoring;
