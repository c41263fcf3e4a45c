//! Scoring strategy configuration

use serde::Deserialize;

use crate::domain::distance::DistanceKind;
use crate::domain::foundation::DegeneratePolicy;
use crate::domain::normalization::NormalizationKind;
use crate::domain::scoring::Topsis;

/// Which strategies the default scoring method is assembled from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Normalization applied before weighting
    pub normalization: NormalizationKind,

    /// Metric used for the ideal and anti-ideal distances
    pub distance: DistanceKind,

    /// How zero divisors are surfaced
    pub degenerate_policy: DegeneratePolicy,
}

impl ScoringConfig {
    /// Builds TOPSIS from the configured strategies. The policy applies to
    /// both the normalization and the closeness step.
    pub fn build_topsis(&self) -> Topsis {
        Topsis::from_boxed(
            self.normalization.build(self.degenerate_policy),
            self.distance.build(),
        )
        .with_policy(self.degenerate_policy)
    }
}
