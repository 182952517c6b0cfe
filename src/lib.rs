//! Binary SVM classifier trained with a simplified SMO solver
//!
//! The dual problem is optimized two multipliers at a time: the outer loop
//! visits every example in index order, pairs each KKT violator with a
//! uniformly random partner, and stops after a configured number of
//! consecutive passes without a multiplier change.

pub mod api;
pub mod core;
pub mod data;
pub mod kernel;
pub mod model;
pub mod optimizer;
pub mod persistence;
pub mod solver;

// Re-export main types for convenience
pub use crate::api::{Svm, TrainedModel};
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::core::{Result, SvmError};
pub use crate::kernel::{GaussianKernel, Kernel, KernelKind, KernelMatrix, LinearKernel};
pub use crate::model::{Predictor, SvmModel};
pub use crate::optimizer::SvmOptimizer;
pub use crate::persistence::ModelFile;
pub use crate::solver::{SmoSolver, SolveOutcome, UniformIndexSampler};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
