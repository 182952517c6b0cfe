//! Trained model artifact and predictor
//!
//! `SvmModel` is an immutable snapshot produced once at the end of
//! training: the support vectors, their remapped labels and multipliers,
//! the bias, the kernel identifier, and (linear kernel only) the explicit
//! weight vector. `Predictor` consumes the snapshot to score new rows.

use crate::core::{DenseMatrix, Prediction, Result, SvmError};
use crate::kernel::{linear::dot, Kernel, KernelKind};
use serde::{Deserialize, Serialize};

/// Trained SVM model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvmModel {
    /// Kernel the model was trained with (including hyperparameters)
    pub kernel: KernelKind,
    /// Bias term
    pub bias: f64,
    /// Support-vector feature rows (training examples with alpha > 0)
    pub support_vectors: DenseMatrix,
    /// Remapped labels (-1/+1) of the support vectors
    pub sv_labels: Vec<f64>,
    /// Lagrange multipliers of the support vectors
    pub alphas: Vec<f64>,
    /// Weight vector w = Σ alpha_i · y_i · x_i, present for the linear kernel only
    pub weights: Option<Vec<f64>>,
}

impl SvmModel {
    /// Number of support vectors
    pub fn n_support_vectors(&self) -> usize {
        self.support_vectors.rows()
    }

    /// Feature dimensionality the model expects
    pub fn n_features(&self) -> usize {
        self.support_vectors.cols()
    }

    /// Build a predictor over this model
    ///
    /// Fails only when the stored kernel hyperparameters are invalid,
    /// which can happen with a hand-edited or corrupted model file.
    pub fn predictor(&self) -> Result<Predictor<'_>> {
        Predictor::new(self)
    }
}

/// Scores feature rows against a trained model
///
/// Pure function of the model and its input: no side effects, no mutation.
pub struct Predictor<'a> {
    model: &'a SvmModel,
    kernel: Box<dyn Kernel>,
}

impl<'a> Predictor<'a> {
    fn new(model: &'a SvmModel) -> Result<Self> {
        let kernel = model.kernel.build()?;
        Ok(Self { model, kernel })
    }

    /// Signed margin of a single feature row
    ///
    /// Linear models score through the precomputed weight vector; other
    /// kernels go through the dual expansion over the support vectors.
    pub fn decision_value(&self, x: &[f64]) -> f64 {
        match &self.model.weights {
            Some(w) => dot(x, w) + self.model.bias,
            None => self.decision_value_dual(x),
        }
    }

    /// Signed margin via the dual expansion Σ alpha·y·K(x, sv) + b
    ///
    /// Works for every kernel; for linear models this must agree with the
    /// weight-vector path up to floating-point error.
    pub fn decision_value_dual(&self, x: &[f64]) -> f64 {
        let mut score = 0.0;
        for s in 0..self.model.support_vectors.rows() {
            let k = self.kernel.compute(x, self.model.support_vectors.row(s));
            score += self.model.alphas[s] * self.model.sv_labels[s] * k;
        }
        score + self.model.bias
    }

    /// Predict the {0, 1} label of a single feature row
    ///
    /// Threshold is at zero: scores are signed margins, not probabilities.
    pub fn predict_one(&self, x: &[f64]) -> Prediction {
        let decision_value = self.decision_value(x);
        let label = if decision_value >= 0.0 { 1.0 } else { 0.0 };
        Prediction::new(label, decision_value)
    }

    /// Predict labels for every row of a feature matrix
    pub fn predict(&self, x: &DenseMatrix) -> Result<Vec<Prediction>> {
        if x.cols() != self.model.n_features() {
            return Err(SvmError::InvalidInput(format!(
                "expected {} features, got {}",
                self.model.n_features(),
                x.cols()
            )));
        }
        Ok((0..x.rows()).map(|i| self.predict_one(x.row(i))).collect())
    }
}
