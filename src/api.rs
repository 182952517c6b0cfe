//! High-level API for SVM training and prediction
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use smosvm::api::Svm;
//! use smosvm::core::DenseMatrix;
//! use smosvm::kernel::KernelKind;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let x = DenseMatrix::from_rows(&[
//!     vec![2.0, 2.0],
//!     vec![-1.0, -1.0],
//! ])?;
//! let y = vec![1.0, 0.0];
//!
//! let model = Svm::new()
//!     .with_kernel(KernelKind::Linear)
//!     .with_c(1.0)
//!     .with_seed(42)
//!     .train(&x, &y)?;
//!
//! println!("training accuracy: {:.2}", model.accuracy(&x, &y)?);
//! # Ok(())
//! # }
//! ```

use crate::core::{DenseMatrix, Prediction, Result, SolverConfig, SvmError, TrainingObserver};
use crate::kernel::KernelKind;
use crate::model::SvmModel;
use crate::optimizer::SvmOptimizer;
use crate::persistence::ModelFile;
use std::path::Path;

/// SVM builder with linear kernel and default parameters
pub struct Svm {
    kernel: KernelKind,
    config: SolverConfig,
    seed: Option<u64>,
}

impl Svm {
    /// Create a new SVM with linear kernel and default parameters
    pub fn new() -> Self {
        Self {
            kernel: KernelKind::Linear,
            config: SolverConfig::default(),
            seed: None,
        }
    }

    /// Select the kernel
    pub fn with_kernel(mut self, kernel: KernelKind) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set regularization parameter C
    pub fn with_c(mut self, c: f64) -> Self {
        self.config.c = c;
        self
    }

    /// Set numerical tolerance
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.config.tol = tol;
        self
    }

    /// Set the number of consecutive zero-change passes that ends training
    pub fn with_max_stalled_passes(mut self, passes: usize) -> Self {
        self.config.max_stalled_passes = passes;
        self
    }

    /// Fix the seed of the second-index generator
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn optimizer(&self) -> SvmOptimizer {
        let optimizer = SvmOptimizer::new(self.kernel, self.config.clone());
        match self.seed {
            Some(seed) => optimizer.with_seed(seed),
            None => optimizer,
        }
    }

    /// Train on a feature matrix and {0,1} label vector
    pub fn train(self, x: &DenseMatrix, y: &[f64]) -> Result<TrainedModel> {
        let model = self.optimizer().train(x, y)?;
        Ok(TrainedModel {
            model,
            config: self.config,
        })
    }

    /// Train with a progress observer
    pub fn train_with_observer(
        self,
        x: &DenseMatrix,
        y: &[f64],
        observer: &mut dyn TrainingObserver,
    ) -> Result<TrainedModel> {
        let model = self.optimizer().train_with_observer(x, y, observer)?;
        Ok(TrainedModel {
            model,
            config: self.config,
        })
    }

    /// Train from a labeled CSV file (last column is the {0,1} label)
    pub fn train_from_csv<P: AsRef<Path>>(self, path: P) -> Result<TrainedModel> {
        let (x, y) = crate::data::load_labeled(path)?;
        self.train(&x, &y)
    }
}

impl Default for Svm {
    fn default() -> Self {
        Self::new()
    }
}

/// Trained SVM model with a high-level prediction interface
pub struct TrainedModel {
    model: SvmModel,
    config: SolverConfig,
}

impl TrainedModel {
    /// Predict labels for every row of a feature matrix
    pub fn predict(&self, x: &DenseMatrix) -> Result<Vec<Prediction>> {
        self.model.predictor()?.predict(x)
    }

    /// Fraction of correctly predicted labels on a labeled set
    pub fn accuracy(&self, x: &DenseMatrix, y: &[f64]) -> Result<f64> {
        if x.rows() != y.len() {
            return Err(SvmError::InvalidInput(format!(
                "feature matrix has {} rows but label vector has {} entries",
                x.rows(),
                y.len()
            )));
        }
        let predictions = self.predict(x)?;
        let correct = predictions
            .iter()
            .zip(y.iter())
            .filter(|(pred, &actual)| pred.label == actual)
            .count();
        Ok(correct as f64 / y.len() as f64)
    }

    /// Save the model to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        ModelFile::new(self.model.clone(), &self.config).save(path)
    }

    /// Load a model from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = ModelFile::load(path)?;
        let config = SolverConfig {
            c: file.metadata.training_params.c,
            tol: file.metadata.training_params.tol,
            max_stalled_passes: file.metadata.training_params.max_stalled_passes,
        };
        Ok(Self {
            model: file.into_model(),
            config,
        })
    }

    /// Borrow the underlying model artifact
    pub fn model(&self) -> &SvmModel {
        &self.model
    }

    /// Take ownership of the underlying model artifact
    pub fn into_model(self) -> SvmModel {
        self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable() -> (DenseMatrix, Vec<f64>) {
        let x = DenseMatrix::from_rows(&[
            vec![2.0, 2.0],
            vec![2.0, 1.0],
            vec![-1.0, -1.0],
            vec![-1.0, 0.0],
        ])
        .unwrap();
        (x, vec![1.0, 1.0, 0.0, 0.0])
    }

    #[test]
    fn test_builder_defaults() {
        let svm = Svm::new();
        assert_eq!(svm.kernel, KernelKind::Linear);
        assert_eq!(svm.config.c, 1.0);
        assert_eq!(svm.config.tol, 1e-3);
        assert_eq!(svm.config.max_stalled_passes, 5);
    }

    #[test]
    fn test_train_and_accuracy() {
        let (x, y) = separable();
        let model = Svm::new()
            .with_c(1.0)
            .with_max_stalled_passes(10)
            .with_seed(42)
            .train(&x, &y)
            .unwrap();

        let accuracy = model.accuracy(&x, &y).unwrap();
        assert_eq!(accuracy, 1.0);
    }

    #[test]
    fn test_accuracy_dimension_check() {
        let (x, y) = separable();
        let model = Svm::new().with_seed(1).train(&x, &y).unwrap();
        assert!(matches!(
            model.accuracy(&x, &[1.0]),
            Err(SvmError::InvalidInput(_))
        ));
    }
}
