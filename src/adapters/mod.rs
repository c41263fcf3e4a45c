//! Adapters - Implementations of port interfaces.
//!
//! - `correlation` - Spearman and Pearson coefficients for `RankCorrelation`

pub mod correlation;

pub use correlation::{PearsonCorrelation, SpearmanCorrelation};
