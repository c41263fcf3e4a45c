//! Direction and degenerate-input policies shared across the pipeline.

use serde::{Deserialize, Serialize};

use super::McdaError;

/// Sort direction used when converting scores into ranks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Larger value is better (rank 1 is the maximum).
    #[default]
    Descending,
    /// Smaller value is better (rank 1 is the minimum).
    Ascending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn reversed(&self) -> Self {
        match self {
            SortOrder::Descending => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
        }
    }
}

/// How a zero divisor in normalization or scoring is surfaced.
///
/// Under `PropagateNan` the division is carried out and the resulting
/// `NaN`/`inf` is returned to the caller. A `NaN` in a preference vector is
/// then the sentinel for the condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    #[default]
    Strict,
    PropagateNan,
}

impl DegeneratePolicy {
    /// Returns true when degenerate input should raise an error.
    pub fn is_strict(&self) -> bool {
        matches!(self, DegeneratePolicy::Strict)
    }

    /// Raises `error` when `degenerate` holds under the strict policy;
    /// otherwise logs and lets the offending division go ahead.
    pub fn check(
        &self,
        degenerate: bool,
        error: impl FnOnce() -> McdaError,
    ) -> Result<(), McdaError> {
        if !degenerate {
            return Ok(());
        }
        let error = error();
        if self.is_strict() {
            return Err(error);
        }
        tracing::warn!(%error, "Propagating NaN for degenerate input");
        Ok(())
    }
}
