//! Dense symmetric kernel matrix

use crate::core::{DenseMatrix, Result, SvmError};
use crate::kernel::Kernel;

/// Precomputed m×m kernel matrix over a training set
///
/// Symmetry is enforced by construction: only the upper triangle is
/// evaluated and both mirror entries are written from the single result.
#[derive(Debug, Clone)]
pub struct KernelMatrix {
    values: DenseMatrix,
}

impl KernelMatrix {
    /// Compute the kernel matrix of a dataset under the given kernel
    ///
    /// Each unordered pair (i, j) is evaluated exactly once; the kernel
    /// call count is m·(m+1)/2.
    pub fn from_kernel(x: &DenseMatrix, kernel: &dyn Kernel) -> Self {
        let m = x.rows();
        let mut values = DenseMatrix::zeros(m, m);
        for i in 0..m {
            for j in i..m {
                let k = kernel.compute(x.row(i), x.row(j));
                values.set(i, j, k);
                values.set(j, i, k);
            }
        }
        Self { values }
    }

    /// Wrap a caller-precomputed kernel matrix
    ///
    /// The matrix must be square; symmetry is the caller's contract.
    pub fn from_precomputed(values: DenseMatrix) -> Result<Self> {
        if values.rows() != values.cols() {
            return Err(SvmError::InvalidInput(format!(
                "kernel matrix must be square, got {}x{}",
                values.rows(),
                values.cols()
            )));
        }
        Ok(Self { values })
    }

    /// Kernel value between training examples i and j
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values.get(i, j)
    }

    /// Number of training examples the matrix covers
    pub fn size(&self) -> usize {
        self.values.rows()
    }
}
