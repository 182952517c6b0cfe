//! High-level SVM training
//!
//! Validates inputs, remaps {0,1} labels to -1/+1, builds (or accepts) the
//! kernel matrix, runs the SMO solver, and assembles the trained model.

use crate::core::{
    DenseMatrix, Result, SilentObserver, SolverConfig, SvmError, TrainingObserver,
};
use crate::kernel::{KernelKind, KernelMatrix};
use crate::model::SvmModel;
use crate::solver::{SmoSolver, UniformIndexSampler};
use log::debug;

/// SVM trainer combining a kernel selection with solver configuration
pub struct SvmOptimizer {
    kernel: KernelKind,
    config: SolverConfig,
    seed: Option<u64>,
}

impl SvmOptimizer {
    /// Create an optimizer for the given kernel and solver configuration
    pub fn new(kernel: KernelKind, config: SolverConfig) -> Self {
        Self {
            kernel,
            config,
            seed: None,
        }
    }

    /// Create an optimizer with default solver configuration
    pub fn with_kernel(kernel: KernelKind) -> Self {
        Self::new(kernel, SolverConfig::default())
    }

    /// Fix the seed of the second-index generator for reproducible training
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Get the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Get the kernel selection
    pub fn kernel(&self) -> KernelKind {
        self.kernel
    }

    /// Train a model on a feature matrix and {0,1} label vector
    pub fn train(&self, x: &DenseMatrix, y: &[f64]) -> Result<SvmModel> {
        self.train_with_observer(x, y, &mut SilentObserver)
    }

    /// Train with a progress observer receiving per-pass callbacks
    pub fn train_with_observer(
        &self,
        x: &DenseMatrix,
        y: &[f64],
        observer: &mut dyn TrainingObserver,
    ) -> Result<SvmModel> {
        self.validate(x, y)?;
        let kernel_fn = self.kernel.build()?;
        let kernel_matrix = KernelMatrix::from_kernel(x, kernel_fn.as_ref());
        self.run(x, y, &kernel_matrix, observer)
    }

    /// Train against a caller-precomputed kernel matrix
    ///
    /// Skips the O(m²·n) matrix construction; the matrix must cover
    /// exactly the given training examples.
    pub fn train_precomputed(
        &self,
        x: &DenseMatrix,
        y: &[f64],
        kernel_matrix: &KernelMatrix,
    ) -> Result<SvmModel> {
        self.validate(x, y)?;
        // Validate hyperparameters even though the matrix is supplied; the
        // predictor will need a working kernel for unseen points.
        self.kernel.build()?;
        if kernel_matrix.size() != x.rows() {
            return Err(SvmError::InvalidInput(format!(
                "kernel matrix covers {} examples, dataset has {}",
                kernel_matrix.size(),
                x.rows()
            )));
        }
        self.run(x, y, kernel_matrix, &mut SilentObserver)
    }

    fn validate(&self, x: &DenseMatrix, y: &[f64]) -> Result<()> {
        if x.is_empty() {
            return Err(SvmError::InvalidInput("empty dataset".to_string()));
        }
        // The pair update needs a second index distinct from the first
        if x.rows() < 2 {
            return Err(SvmError::InvalidInput(
                "need at least two training examples".to_string(),
            ));
        }
        if x.rows() != y.len() {
            return Err(SvmError::InvalidInput(format!(
                "feature matrix has {} rows but label vector has {} entries",
                x.rows(),
                y.len()
            )));
        }
        for &label in y {
            if label != 0.0 && label != 1.0 {
                return Err(SvmError::InvalidLabel(label));
            }
        }
        Ok(())
    }

    fn run(
        &self,
        x: &DenseMatrix,
        y: &[f64],
        kernel_matrix: &KernelMatrix,
        observer: &mut dyn TrainingObserver,
    ) -> Result<SvmModel> {
        // Internal representation only; caller-owned labels stay {0,1}
        let signed: Vec<f64> = y
            .iter()
            .map(|&v| if v == 0.0 { -1.0 } else { 1.0 })
            .collect();

        let mut sampler = match self.seed {
            Some(seed) => UniformIndexSampler::seeded(seed),
            None => UniformIndexSampler::from_entropy(),
        };

        let solver = SmoSolver::new(self.config.clone());
        let outcome = solver.solve(kernel_matrix, &signed, &mut sampler, observer);

        let support: Vec<usize> = outcome
            .alpha
            .iter()
            .enumerate()
            .filter_map(|(i, &a)| if a > 0.0 { Some(i) } else { None })
            .collect();
        debug!(
            "training finished after {} passes, {} support vectors",
            outcome.passes,
            support.len()
        );

        let weights = match self.kernel {
            KernelKind::Linear => Some(linear_weights(x, &signed, &outcome.alpha)),
            KernelKind::Gaussian { .. } => None,
        };

        Ok(SvmModel {
            kernel: self.kernel,
            bias: outcome.b,
            support_vectors: x.select_rows(&support),
            sv_labels: support.iter().map(|&i| signed[i]).collect(),
            alphas: support.iter().map(|&i| outcome.alpha[i]).collect(),
            weights,
        })
    }
}

/// Weight vector w = Σ alpha_i · y_i · x_i over the full training set
fn linear_weights(x: &DenseMatrix, signed: &[f64], alpha: &[f64]) -> Vec<f64> {
    let mut w = vec![0.0; x.cols()];
    for i in 0..x.rows() {
        let coeff = alpha[i] * signed[i];
        if coeff != 0.0 {
            for (wj, &xj) in w.iter_mut().zip(x.row(i)) {
                *wj += coeff * xj;
            }
        }
    }
    w
}
