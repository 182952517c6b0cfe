//! Linear kernel implementation

use crate::kernel::Kernel;

/// Linear kernel: K(x, y) = x^T * y
///
/// The simplest kernel function, computing the raw dot product between two
/// feature rows. A model trained with this kernel also carries an explicit
/// weight vector, so prediction does not need the support vectors at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearKernel;

impl LinearKernel {
    /// Create a new linear kernel
    pub fn new() -> Self {
        Self
    }
}

impl Kernel for LinearKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        dot(x, y)
    }
}

/// Dot product of two dense rows of equal length
pub(crate) fn dot(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    x.iter().zip(y.iter()).map(|(a, b)| a * b).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_kernel_basic() {
        let kernel = LinearKernel::new();
        // 1*4 + 2*5 + 3*6 = 32
        assert_eq!(kernel.compute(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    }

    #[test]
    fn test_linear_kernel_identical() {
        let kernel = LinearKernel::new();
        let x = [1.0, 2.0, 3.0];
        // x^T * x = 1 + 4 + 9 = 14
        assert_eq!(kernel.compute(&x, &x), 14.0);
    }

    #[test]
    fn test_linear_kernel_orthogonal() {
        let kernel = LinearKernel::new();
        assert_eq!(kernel.compute(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_dot_empty() {
        assert_eq!(dot(&[], &[]), 0.0);
    }
}
