//! Decision matrix - alternatives (rows) x criteria (columns).

use serde::{Deserialize, Serialize};

use super::McdaError;

/// A rectangular table of finite real numbers.
///
/// Rows are alternatives, columns are criteria. Stored row-major and never
/// mutated after construction; every transformation returns a new matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DecisionMatrix {
    alternatives: usize,
    criteria: usize,
    data: Vec<f64>,
}

impl DecisionMatrix {
    /// Creates a matrix from rows, rejecting empty, ragged or non-finite input.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, McdaError> {
        let (alternatives, criteria, data) = flatten_rows(rows, "decision matrix")?;

        if let Some(pos) = data.iter().position(|v| !v.is_finite()) {
            return Err(McdaError::NonFinite {
                row: pos / criteria,
                column: pos % criteria,
            });
        }

        Ok(Self {
            alternatives,
            criteria,
            data,
        })
    }

    /// Creates a matrix from columns (one vector per criterion).
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self, McdaError> {
        Self::new(transpose(columns, "decision matrix")?)
    }

    /// Builds a matrix column by column from already validated dimensions.
    ///
    /// Entries may be non-finite: this is the path taken by normalizations
    /// running under `DegeneratePolicy::PropagateNan`.
    pub(crate) fn from_column_fn<F>(alternatives: usize, criteria: usize, mut f: F) -> Self
    where
        F: FnMut(usize) -> Vec<f64>,
    {
        let mut data = vec![0.0; alternatives * criteria];
        for j in 0..criteria {
            let column = f(j);
            debug_assert_eq!(column.len(), alternatives);
            for (i, value) in column.into_iter().enumerate() {
                data[i * criteria + j] = value;
            }
        }
        Self {
            alternatives,
            criteria,
            data,
        }
    }

    /// Number of alternatives (rows).
    pub fn alternatives(&self) -> usize {
        self.alternatives
    }

    /// Number of criteria (columns).
    pub fn criteria(&self) -> usize {
        self.criteria
    }

    /// Returns the entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.alternatives && j < self.criteria, "index out of bounds");
        self.data[i * self.criteria + j]
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.criteria;
        &self.data[start..start + self.criteria]
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.criteria)
    }

    /// Returns column `j` as an owned vector.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.rows().map(|row| row[j]).collect()
    }

    /// Returns a new matrix with every column multiplied by its factor.
    pub fn scale_columns(&self, factors: &[f64]) -> Result<Self, McdaError> {
        self.ensure_criteria(factors.len(), "column factors length")?;
        let data = self
            .rows()
            .flat_map(|row| row.iter().zip(factors).map(|(v, w)| v * w))
            .collect();
        Ok(Self {
            alternatives: self.alternatives,
            criteria: self.criteria,
            data,
        })
    }

    /// Returns a new matrix with rows reordered so that row `k` of the result
    /// is row `order[k]` of `self`.
    pub fn permute_rows(&self, order: &[usize]) -> Result<Self, McdaError> {
        if order.len() != self.alternatives {
            return Err(McdaError::shape_mismatch(
                "row permutation length",
                self.alternatives,
                order.len(),
            ));
        }
        let mut data = Vec::with_capacity(self.data.len());
        for &i in order {
            if i >= self.alternatives {
                return Err(McdaError::shape_mismatch(
                    "row permutation index bound",
                    self.alternatives,
                    i,
                ));
            }
            data.extend_from_slice(self.row(i));
        }
        Ok(Self {
            alternatives: self.alternatives,
            criteria: self.criteria,
            data,
        })
    }

    /// Fails with `ShapeMismatch` unless the matrix has `n` criteria.
    pub fn ensure_criteria(&self, n: usize, what: &str) -> Result<(), McdaError> {
        if n != self.criteria {
            return Err(McdaError::shape_mismatch(what, self.criteria, n));
        }
        Ok(())
    }

    /// Returns the rows as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for DecisionMatrix {
    type Error = McdaError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<DecisionMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DecisionMatrix) -> Self {
        matrix.to_rows()
    }
}

/// Flattens rows into row-major storage, checking they are non-empty and
/// rectangular.
pub(super) fn flatten_rows<T: Copy>(
    rows: Vec<Vec<T>>,
    what: &str,
) -> Result<(usize, usize, Vec<T>), McdaError> {
    let alternatives = rows.len();
    if alternatives == 0 {
        return Err(McdaError::empty_input(what));
    }

    let width = rows[0].len();
    if width == 0 {
        return Err(McdaError::empty_input(format!("{} columns", what)));
    }

    let mut data = Vec::with_capacity(alternatives * width);
    for row in rows {
        if row.len() != width {
            return Err(McdaError::shape_mismatch(
                format!("{} row length", what),
                width,
                row.len(),
            ));
        }
        data.extend(row);
    }

    Ok((alternatives, width, data))
}

/// Converts column vectors into row vectors, checking equal column lengths.
pub(super) fn transpose<T: Copy>(columns: Vec<Vec<T>>, what: &str) -> Result<Vec<Vec<T>>, McdaError> {
    let Some(first) = columns.first() else {
        return Err(McdaError::empty_input(what));
    };
    let height = first.len();

    for column in &columns {
        if column.len() != height {
            return Err(McdaError::shape_mismatch(
                format!("{} column length", what),
                height,
                column.len(),
            ));
        }
    }

    Ok((0..height)
        .map(|i| columns.iter().map(|c| c[i]).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn sample() -> DecisionMatrix {
        DecisionMatrix::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn new_records_dimensions() {
        let matrix = sample();
        assert_eq!(matrix.alternatives(), 2);
        assert_eq!(matrix.criteria(), 3);
        assert_eq!(matrix.get(1, 2), 6.0);
        assert_eq!(matrix.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(matrix.column(1), vec![2.0, 5.0]);
    }

    #[test]
    fn new_rejects_empty() {
        let err = DecisionMatrix::new(vec![]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);

        let err = DecisionMatrix::new(vec![vec![]]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let err = DecisionMatrix::new(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ShapeMismatch);
    }

    #[test]
    fn new_rejects_non_finite() {
        let err = DecisionMatrix::new(vec![vec![1.0, 2.0], vec![f64::NAN, 3.0]]).unwrap_err();
        assert_eq!(err, McdaError::NonFinite { row: 1, column: 0 });
    }

    #[test]
    fn from_columns_transposes() {
        let matrix =
            DecisionMatrix::from_columns(vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]])
                .unwrap();
        assert_eq!(matrix, sample());
    }

    #[test]
    fn scale_columns_returns_new_matrix() {
        let matrix = sample();
        let scaled = matrix.scale_columns(&[2.0, 0.0, 1.0]).unwrap();
        assert_eq!(scaled.row(1), &[8.0, 0.0, 6.0]);
        assert_eq!(matrix.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn scale_columns_checks_length() {
        let err = sample().scale_columns(&[1.0]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ShapeMismatch);
    }

    #[test]
    fn permute_rows_reorders() {
        let permuted = sample().permute_rows(&[1, 0]).unwrap();
        assert_eq!(permuted.row(0), &[4.0, 5.0, 6.0]);
        assert!(sample().permute_rows(&[0]).is_err());
        assert!(sample().permute_rows(&[0, 2]).is_err());
    }

    #[test]
    fn serializes_as_nested_rows() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, "[[1.0,2.0,3.0],[4.0,5.0,6.0]]");

        let parsed: DecisionMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }
}
