//! MethodEnsemble - runs several scoring methods and fuses their rankings.
//!
//! Flow:
//! 1. Every configured method scores the same decision matrix
//! 2. Scores become ranks through each method's preference direction
//! 3. Rank vectors are stacked column-wise into a `RankingMatrix`
//! 4. A compromise aggregator fuses the columns into one consensus ranking

use serde::Serialize;

use crate::domain::compromise::{improved_borda_rule, CompromiseMethod};
use crate::domain::foundation::{
    CriteriaWeights, CriterionType, DecisionMatrix, McdaError, PreferenceMatrix, RankingMatrix,
    SortOrder,
};
use crate::domain::ranking::rank_preferences;
use crate::domain::scoring::{validate_inputs, ScoringMethod};
use crate::ports::RankCorrelation;

/// An ordered collection of labelled scoring methods.
#[derive(Debug, Default)]
pub struct MethodEnsemble {
    methods: Vec<(String, Box<dyn ScoringMethod>)>,
}

impl MethodEnsemble {
    /// Creates an empty ensemble.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a method under `label`. Column order in the outcome follows
    /// insertion order.
    pub fn with_method(self, label: impl Into<String>, method: impl ScoringMethod + 'static) -> Self {
        self.with_boxed(label, Box::new(method))
    }

    /// Adds an already boxed method under `label`.
    pub fn with_boxed(mut self, label: impl Into<String>, method: Box<dyn ScoringMethod>) -> Self {
        self.methods.push((label.into(), method));
        self
    }

    /// Number of methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns true if no method has been added.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Scores the matrix with every method.
    ///
    /// Fails on the first method error; no partial outcome is returned.
    pub fn evaluate(
        &self,
        matrix: &DecisionMatrix,
        weights: &CriteriaWeights,
        types: &[CriterionType],
    ) -> Result<EnsembleOutcome, McdaError> {
        if self.methods.is_empty() {
            return Err(McdaError::empty_input("ensemble methods"));
        }
        validate_inputs(matrix, weights, types)?;

        tracing::debug!(
            methods = self.methods.len(),
            alternatives = matrix.alternatives(),
            criteria = matrix.criteria(),
            "Evaluating method ensemble"
        );

        let mut results = Vec::with_capacity(self.methods.len());
        for (label, method) in &self.methods {
            let preferences = method.score(matrix, weights, types)?;
            let order = method.preference_order();
            let ranks = rank_preferences(&preferences, order);
            results.push(MethodResult {
                label: label.clone(),
                method: method.name().to_string(),
                order,
                preferences,
                ranks,
            });
        }

        let ranking_matrix =
            RankingMatrix::from_columns(results.iter().map(|r| r.ranks.clone()).collect())?;

        Ok(EnsembleOutcome {
            results,
            ranking_matrix,
        })
    }
}

/// Scores and ranks produced by one ensemble member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodResult {
    pub label: String,
    pub method: String,
    pub order: SortOrder,
    pub preferences: Vec<f64>,
    pub ranks: Vec<usize>,
}

/// Per-method results plus the stacked ranking matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnsembleOutcome {
    results: Vec<MethodResult>,
    ranking_matrix: RankingMatrix,
}

impl EnsembleOutcome {
    /// Results in method insertion order.
    pub fn results(&self) -> &[MethodResult] {
        &self.results
    }

    /// Looks up a result by label.
    pub fn result(&self, label: &str) -> Option<&MethodResult> {
        self.results.iter().find(|r| r.label == label)
    }

    /// Ranks stacked column-wise, one column per method.
    pub fn ranking_matrix(&self) -> &RankingMatrix {
        &self.ranking_matrix
    }

    /// Preferences stacked column-wise. Fails if any method produced a
    /// `NaN` sentinel.
    pub fn preference_matrix(&self) -> Result<PreferenceMatrix, McdaError> {
        PreferenceMatrix::from_columns(self.results.iter().map(|r| r.preferences.clone()).collect())
    }

    /// Fuses the rankings with a rank-only aggregator.
    pub fn compromise(&self, method: CompromiseMethod) -> Vec<usize> {
        tracing::debug!(%method, "Computing compromise ranking");
        method.apply(&self.ranking_matrix)
    }

    /// Fuses a three-member ensemble with the Improved Borda Rule. Members
    /// must be in role order (larger-better, smaller-better, larger-better).
    pub fn improved_borda(&self) -> Result<Vec<usize>, McdaError> {
        improved_borda_rule(&self.preference_matrix()?, &self.ranking_matrix)
    }

    /// Pairwise agreement between member rankings, labelled with the
    /// coefficient name and member labels.
    pub fn correlations(
        &self,
        coefficient: &dyn RankCorrelation,
    ) -> Result<CorrelationTable, McdaError> {
        let values = self
            .results
            .iter()
            .map(|a| {
                self.results
                    .iter()
                    .map(|b| coefficient.correlate(&a.ranks, &b.ranks))
                    .collect()
            })
            .collect::<Result<Vec<Vec<f64>>, McdaError>>()?;

        Ok(CorrelationTable {
            coefficient: coefficient.name().to_string(),
            labels: self.results.iter().map(|r| r.label.clone()).collect(),
            values,
        })
    }
}

/// Symmetric `k x k` agreement table between ensemble members.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationTable {
    coefficient: String,
    labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationTable {
    /// Name of the coefficient that produced the table.
    pub fn coefficient(&self) -> &str {
        &self.coefficient
    }

    /// Member labels, in row and column order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Correlation between members `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Correlation between two members looked up by label.
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        Some(self.values[i][j])
    }

    /// Rows of the table.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true for a table without members.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
