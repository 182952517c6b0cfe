//! Gaussian (RBF) kernel implementation
//!
//! The Gaussian kernel is defined as: K(x, y) = exp(-||x - y||² / (2σ²))
//! where σ (sigma) is the bandwidth hyperparameter.

use crate::core::{Result, SvmError};
use crate::kernel::Kernel;

/// Gaussian kernel: K(x, y) = exp(-||x - y||² / (2σ²))
///
/// The sigma parameter controls the "reach" of each training example:
/// - Small sigma: close points dominate (potential overfitting)
/// - Large sigma: distant points still contribute (potential underfitting)
///
/// K(x, x) is always exactly 1.
#[derive(Debug, Clone, Copy)]
pub struct GaussianKernel {
    sigma: f64,
}

impl GaussianKernel {
    /// Create a new Gaussian kernel with the given bandwidth
    ///
    /// Returns `InvalidParameter` if sigma is not strictly positive; a
    /// non-positive sigma would silently produce NaN or degenerate
    /// matrices downstream.
    pub fn new(sigma: f64) -> Result<Self> {
        if !(sigma > 0.0) {
            return Err(SvmError::InvalidParameter(format!(
                "sigma must be positive, got {}",
                sigma
            )));
        }
        Ok(Self { sigma })
    }

    /// Get the sigma parameter
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Kernel for GaussianKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        let dist_sq = squared_distance(x, y);
        (-dist_sq / (2.0 * self.sigma * self.sigma)).exp()
    }
}

/// Squared Euclidean distance between two dense rows of equal length
pub(crate) fn squared_distance(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    x.iter()
        .zip(y.iter())
        .map(|(a, b)| {
            let d = a - b;
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_kernel_creation() {
        let kernel = GaussianKernel::new(0.5).unwrap();
        assert_eq!(kernel.sigma(), 0.5);
    }

    #[test]
    fn test_gaussian_kernel_zero_sigma() {
        assert!(matches!(
            GaussianKernel::new(0.0),
            Err(SvmError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_gaussian_kernel_negative_sigma() {
        assert!(matches!(
            GaussianKernel::new(-1.0),
            Err(SvmError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_gaussian_kernel_nan_sigma() {
        assert!(matches!(
            GaussianKernel::new(f64::NAN),
            Err(SvmError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_gaussian_kernel_identical_vectors() {
        let kernel = GaussianKernel::new(1.0).unwrap();
        let x = [1.0, 2.0, 3.0];
        assert!((kernel.compute(&x, &x) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_gaussian_kernel_known_value() {
        let kernel = GaussianKernel::new(2.0).unwrap();
        // ||x - y||² = 4, K = exp(-4 / 8) = exp(-0.5)
        let result = kernel.compute(&[1.0], &[3.0]);
        assert!((result - (-0.5_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_gaussian_kernel_symmetry() {
        let kernel = GaussianKernel::new(0.7).unwrap();
        let x = [1.0, 2.0, 3.0];
        let y = [0.5, -1.0, 2.0];
        assert_eq!(kernel.compute(&x, &y), kernel.compute(&y, &x));
    }

    #[test]
    fn test_gaussian_kernel_decreases_with_distance() {
        let kernel = GaussianKernel::new(1.0).unwrap();
        let x = [0.0];
        let k1 = kernel.compute(&x, &[1.0]);
        let k2 = kernel.compute(&x, &[2.0]);
        let k3 = kernel.compute(&x, &[3.0]);
        assert!(k1 > k2 && k2 > k3);
        assert!(k3 > 0.0 && k1 < 1.0);
    }

    #[test]
    fn test_squared_distance() {
        // (1-2)² + (3-1)² = 5
        assert_eq!(squared_distance(&[1.0, 3.0], &[2.0, 1.0]), 5.0);
        assert_eq!(squared_distance(&[1.0, 3.0], &[1.0, 3.0]), 0.0);
    }
}
