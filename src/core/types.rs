//! Core type definitions for SVM training

use crate::core::{Result, SvmError};
use serde::{Deserialize, Serialize};

/// Prediction result containing label and decision value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted class label (0 or 1)
    pub label: f64,
    /// Raw decision function value (signed margin, not a probability)
    pub decision_value: f64,
}

impl Prediction {
    /// Create a new prediction
    pub fn new(label: f64, decision_value: f64) -> Self {
        Self {
            label,
            decision_value,
        }
    }

    /// Get confidence as absolute value of decision value
    pub fn confidence(&self) -> f64 {
        self.decision_value.abs()
    }
}

/// Dense row-major matrix with shape fixed at construction
///
/// All arithmetic in the crate runs over this type: feature matrices,
/// kernel matrices, and support-vector snapshots. Bounds are validated
/// once when the matrix is built; row access returns contiguous slices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Create a matrix of the given shape filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create a matrix from a flat row-major buffer
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(SvmError::InvalidInput(format!(
                "buffer of length {} cannot hold a {}x{} matrix",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from a sequence of equal-length rows
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        if rows.is_empty() {
            return Err(SvmError::InvalidInput("no rows provided".to_string()));
        }
        let cols = rows[0].len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(SvmError::InvalidInput(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the value at (i, j)
    ///
    /// # Panics
    /// Panics if the position is out of bounds
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        self.data[i * self.cols + j]
    }

    /// Set the value at (i, j)
    ///
    /// # Panics
    /// Panics if the position is out of bounds
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        self.data[i * self.cols + j] = value;
    }

    /// Get row `i` as a contiguous slice
    ///
    /// # Panics
    /// Panics if `i >= rows()`
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row index out of bounds");
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Build a new matrix from the selected rows, in the given order
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &i in indices {
            data.extend_from_slice(self.row(i));
        }
        Self {
            rows: indices.len(),
            cols: self.cols,
            data,
        }
    }

    /// Check whether the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

/// Configuration for the SMO solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Regularization parameter (upper bound for alpha)
    pub c: f64,
    /// Numerical tolerance for KKT checks and negligible alpha changes
    pub tol: f64,
    /// Consecutive zero-change passes required to declare convergence
    pub max_stalled_passes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            tol: 1e-3,
            max_stalled_passes: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_zeros() {
        let m = DenseMatrix::zeros(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(1, 2), 0.0);
    }

    #[test]
    fn test_matrix_from_vec() {
        let m = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.get(1, 1), 4.0);
    }

    #[test]
    fn test_matrix_from_vec_bad_shape() {
        let result = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0], 2, 2);
        assert!(matches!(result, Err(SvmError::InvalidInput(_))));
    }

    #[test]
    fn test_matrix_from_rows() {
        let m = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_matrix_from_rows_ragged() {
        let result = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(SvmError::InvalidInput(_))));
    }

    #[test]
    fn test_matrix_from_rows_empty() {
        let result = DenseMatrix::from_rows(&[]);
        assert!(matches!(result, Err(SvmError::InvalidInput(_))));
    }

    #[test]
    fn test_matrix_set_get() {
        let mut m = DenseMatrix::zeros(2, 2);
        m.set(0, 1, 5.0);
        assert_eq!(m.get(0, 1), 5.0);
        assert_eq!(m.get(1, 0), 0.0);
    }

    #[test]
    fn test_matrix_select_rows() {
        let m = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        let sub = m.select_rows(&[2, 0]);
        assert_eq!(sub.rows(), 2);
        assert_eq!(sub.row(0), &[5.0, 6.0]);
        assert_eq!(sub.row(1), &[1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "row index out of bounds")]
    fn test_matrix_row_out_of_bounds() {
        let m = DenseMatrix::zeros(2, 2);
        m.row(2);
    }

    #[test]
    fn test_prediction() {
        let pred = Prediction::new(1.0, 2.5);
        assert_eq!(pred.label, 1.0);
        assert_eq!(pred.decision_value, 2.5);
        assert_eq!(pred.confidence(), 2.5);

        let neg_pred = Prediction::new(0.0, -1.8);
        assert_eq!(neg_pred.confidence(), 1.8);
    }

    #[test]
    fn test_solver_config_default() {
        let config = SolverConfig::default();
        assert_eq!(config.c, 1.0);
        assert_eq!(config.tol, 1e-3);
        assert_eq!(config.max_stalled_passes, 5);
    }
}
