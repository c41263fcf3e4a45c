//! Ports - Interfaces for collaborators outside the scoring core.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RankCorrelation` - Agreement between two rankings

mod rank_correlation;

pub use rank_correlation::RankCorrelation;
