//! Application layer - orchestration over the pure domain services.
//!
//! The ensemble runs several scoring methods on one decision matrix and
//! hands their stacked rankings to a compromise aggregator.

mod ensemble;

pub use ensemble::{CorrelationTable, EnsembleOutcome, MethodEnsemble, MethodResult};
