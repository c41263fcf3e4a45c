//! Ranking and preference matrices consumed by compromise aggregators.

use serde::{Deserialize, Serialize};

use super::decision_matrix::{flatten_rows, transpose};
use super::{DecisionMatrix, McdaError};

/// Ranks of `m` alternatives (rows) produced by `k` methods (columns).
///
/// Every entry lies in `1..=m`; lower is better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>")]
pub struct RankingMatrix {
    alternatives: usize,
    methods: usize,
    data: Vec<usize>,
}

impl RankingMatrix {
    /// Creates a ranking matrix from rows (one row per alternative).
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self, McdaError> {
        let (alternatives, methods, data) = flatten_rows(rows, "ranking matrix")?;

        for (pos, &rank) in data.iter().enumerate() {
            if rank == 0 || rank > alternatives {
                return Err(McdaError::RankOutOfRange {
                    alternative: pos / methods,
                    method: pos % methods,
                    rank,
                    max: alternatives,
                });
            }
        }

        Ok(Self {
            alternatives,
            methods,
            data,
        })
    }

    /// Creates a ranking matrix by stacking rank vectors column-wise.
    pub fn from_columns(columns: Vec<Vec<usize>>) -> Result<Self, McdaError> {
        Self::from_rows(transpose(columns, "ranking matrix")?)
    }

    /// Number of alternatives (rows).
    pub fn alternatives(&self) -> usize {
        self.alternatives
    }

    /// Number of methods (columns).
    pub fn methods(&self) -> usize {
        self.methods
    }

    /// Returns the rank of alternative `i` under method `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.alternatives && j < self.methods, "index out of bounds");
        self.data[i * self.methods + j]
    }

    /// Returns the ranks of alternative `i` across all methods.
    pub fn row(&self, i: usize) -> &[usize] {
        let start = i * self.methods;
        &self.data[start..start + self.methods]
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.data.chunks(self.methods)
    }

    /// Returns the rank vector produced by method `j`.
    pub fn column(&self, j: usize) -> Vec<usize> {
        self.rows().map(|row| row[j]).collect()
    }

    /// Returns the rows as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.rows().map(<[usize]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<usize>>> for RankingMatrix {
    type Error = McdaError;

    fn try_from(rows: Vec<Vec<usize>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<RankingMatrix> for Vec<Vec<usize>> {
    fn from(matrix: RankingMatrix) -> Self {
        matrix.to_rows()
    }
}

/// Preference scores of `m` alternatives (rows) produced by `k` methods
/// (columns). Entries must be finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceMatrix(DecisionMatrix);

impl PreferenceMatrix {
    /// Creates a preference matrix from rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, McdaError> {
        DecisionMatrix::new(rows).map(Self)
    }

    /// Creates a preference matrix by stacking preference vectors column-wise.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self, McdaError> {
        DecisionMatrix::from_columns(columns).map(Self)
    }

    /// Number of alternatives (rows).
    pub fn alternatives(&self) -> usize {
        self.0.alternatives()
    }

    /// Number of methods (columns).
    pub fn methods(&self) -> usize {
        self.0.criteria()
    }

    /// Returns the preference vector produced by method `j`.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.0.column(j)
    }

    /// Borrows the underlying numeric table.
    pub fn as_matrix(&self) -> &DecisionMatrix {
        &self.0
    }
}
