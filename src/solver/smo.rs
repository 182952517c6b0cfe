//! Simplified Sequential Minimal Optimization (SMO) solver
//!
//! Heuristic-free variant of SMO: the outer loop visits every example in
//! index order, and the second working index is drawn uniformly at random
//! rather than by an error-magnitude heuristic. Convergence is declared
//! after a configured number of consecutive full passes with no multiplier
//! change.

use crate::core::{IndexSampler, SolverConfig, TrainingObserver};
use crate::kernel::KernelMatrix;
use log::debug;

/// Raw output of the dual optimization
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Lagrange multipliers, one per training example, each in [0, C]
    pub alpha: Vec<f64>,
    /// Bias term
    pub b: f64,
    /// Number of full passes performed
    pub passes: usize,
}

/// SMO solver operating on a precomputed kernel matrix
///
/// Labels must already be remapped to -1/+1; validation and remapping are
/// the optimizer's job. The solver itself performs no I/O and owns no
/// randomness: the second-index generator and progress observer are
/// injected by the caller.
pub struct SmoSolver {
    config: SolverConfig,
}

impl SmoSolver {
    /// Create a new solver with the given configuration
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Run the dual optimization until the stall counter reaches its limit
    ///
    /// `y` holds -1/+1 labels and must match the kernel matrix size.
    pub fn solve(
        &self,
        kernel: &KernelMatrix,
        y: &[f64],
        sampler: &mut dyn IndexSampler,
        observer: &mut dyn TrainingObserver,
    ) -> SolveOutcome {
        let m = kernel.size();
        debug_assert_eq!(m, y.len());

        let mut alpha = vec![0.0; m];
        let mut b = 0.0;
        let mut errors = vec![0.0; m];

        let mut stalled = 0;
        let mut pass = 0;

        while stalled < self.config.max_stalled_passes {
            let mut changed = 0;

            for i in 0..m {
                errors[i] = decision_error(kernel, y, &alpha, b, i);

                if !self.violates_kkt(y[i], errors[i], alpha[i]) {
                    continue;
                }

                let j = sampler.next_index_excluding(i, m);
                errors[j] = decision_error(kernel, y, &alpha, b, j);

                if self.take_step(kernel, y, &mut alpha, &mut b, &errors, i, j) {
                    changed += 1;
                }
            }

            if changed == 0 {
                stalled += 1;
            } else {
                stalled = 0;
            }

            observer.on_pass_completed(pass, changed);
            debug!("pass {}: {} pairs changed, stalled {}", pass, changed, stalled);
            pass += 1;
        }

        SolveOutcome { alpha, b, passes: pass }
    }

    /// KKT-violation predicate for example i
    fn violates_kkt(&self, y_i: f64, e_i: f64, alpha_i: f64) -> bool {
        let r_i = y_i * e_i;
        (r_i < -self.config.tol && alpha_i < self.config.c)
            || (r_i > self.config.tol && alpha_i > 0.0)
    }

    /// Jointly optimize the pair (alpha_i, alpha_j)
    ///
    /// Returns true when the pair actually changed. Degenerate cases
    /// (empty box, non-concave eta, negligible alpha_j movement) are
    /// ordinary early exits, not errors.
    #[allow(clippy::too_many_arguments)]
    fn take_step(
        &self,
        kernel: &KernelMatrix,
        y: &[f64],
        alpha: &mut [f64],
        b: &mut f64,
        errors: &[f64],
        i: usize,
        j: usize,
    ) -> bool {
        let c = self.config.c;
        let alpha_i_old = alpha[i];
        let alpha_j_old = alpha[j];

        // Box bounds for alpha_j
        let (low, high) = if y[i] == y[j] {
            (
                (alpha_j_old + alpha_i_old - c).max(0.0),
                (alpha_j_old + alpha_i_old).min(c),
            )
        } else {
            (
                (alpha_j_old - alpha_i_old).max(0.0),
                (c + alpha_j_old - alpha_i_old).min(c),
            )
        };
        if low == high {
            return false;
        }

        // Second derivative of the objective along the constraint line
        let eta = 2.0 * kernel.get(i, j) - kernel.get(i, i) - kernel.get(j, j);
        if eta >= 0.0 {
            return false;
        }

        let mut alpha_j_new = alpha_j_old - y[j] * (errors[i] - errors[j]) / eta;
        alpha_j_new = alpha_j_new.min(high).max(low);

        if (alpha_j_new - alpha_j_old).abs() < self.config.tol {
            return false;
        }

        alpha[j] = alpha_j_new;
        alpha[i] = alpha_i_old + y[i] * y[j] * (alpha_j_old - alpha_j_new);

        // Candidate biases from the KKT stationarity conditions of i and j
        let b1 = *b
            - errors[i]
            - y[i] * (alpha[i] - alpha_i_old) * kernel.get(i, j)
            - y[j] * (alpha[j] - alpha_j_old) * kernel.get(i, j);
        let b2 = *b
            - errors[j]
            - y[i] * (alpha[i] - alpha_i_old) * kernel.get(i, j)
            - y[j] * (alpha[j] - alpha_j_old) * kernel.get(j, j);

        *b = if alpha[i] > 0.0 && alpha[i] < c {
            b1
        } else if alpha[j] > 0.0 && alpha[j] < c {
            b2
        } else {
            (b1 + b2) / 2.0
        };

        true
    }
}

/// Cached prediction error E_i = f(x_i) - y_i under the current dual state
fn decision_error(kernel: &KernelMatrix, y: &[f64], alpha: &[f64], b: f64, i: usize) -> f64 {
    let mut f = b;
    for k in 0..alpha.len() {
        if alpha[k] != 0.0 {
            f += alpha[k] * y[k] * kernel.get(k, i);
        }
    }
    f - y[i]
}
