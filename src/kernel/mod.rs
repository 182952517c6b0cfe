//! Kernel functions for SVM

pub mod gaussian;
pub mod linear;
pub mod matrix;
pub mod traits;

pub use self::gaussian::*;
pub use self::linear::*;
pub use self::matrix::*;
pub use self::traits::*;

use crate::core::{Result, SvmError};
use serde::{Deserialize, Serialize};

/// Kernel identifier stored in trained models and parsed from configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kernel", rename_all = "lowercase")]
pub enum KernelKind {
    Linear,
    Gaussian { sigma: f64 },
}

impl KernelKind {
    /// Resolve a kernel name and optional sigma into a kernel identifier
    ///
    /// Unknown names and a missing sigma for `gaussian` are `KernelError`s;
    /// training must not silently continue past a bad kernel selection.
    pub fn parse(name: &str, sigma: Option<f64>) -> Result<Self> {
        match name {
            "linear" => Ok(Self::Linear),
            "gaussian" => {
                let sigma = sigma.ok_or_else(|| {
                    SvmError::KernelError("gaussian kernel requires sigma".to_string())
                })?;
                Ok(Self::Gaussian { sigma })
            }
            other => Err(SvmError::KernelError(format!(
                "unknown kernel '{}'",
                other
            ))),
        }
    }

    /// Instantiate the kernel function this identifier names
    ///
    /// Validates hyperparameters, so a deserialized model with a bad sigma
    /// fails here rather than producing NaN scores.
    pub fn build(&self) -> Result<Box<dyn Kernel>> {
        match *self {
            Self::Linear => Ok(Box::new(LinearKernel::new())),
            Self::Gaussian { sigma } => Ok(Box::new(GaussianKernel::new(sigma)?)),
        }
    }

    /// Name of the kernel as used in configuration
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Gaussian { .. } => "gaussian",
        }
    }
}
