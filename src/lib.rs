//! MCDA Rank - multi-criteria decision analysis scoring and compromise ranking.
//!
//! A decision matrix of alternatives (rows) and criteria (columns) is scored
//! by one or more methods such as TOPSIS. The resulting rankings can then be
//! fused into a single consensus order by a compromise aggregator.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
