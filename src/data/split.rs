//! Seeded train/test partitioning

use crate::core::{DenseMatrix, Result, SvmError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Disjoint train/test partition of a labeled dataset
#[derive(Debug, Clone)]
pub struct SplitSets {
    pub train_x: DenseMatrix,
    pub train_y: Vec<f64>,
    pub test_x: DenseMatrix,
    pub test_y: Vec<f64>,
}

/// Randomly partition `(x, y)` into train and test subsets
///
/// `test_fraction` must lie strictly in (0, 1) and the resulting test set
/// must leave at least one training example. The shuffle is driven by the
/// seed, so identical inputs give identical partitions.
pub fn train_test_split(
    x: &DenseMatrix,
    y: &[f64],
    test_fraction: f64,
    seed: u64,
) -> Result<SplitSets> {
    if x.rows() != y.len() {
        return Err(SvmError::InvalidInput(format!(
            "feature matrix has {} rows but label vector has {} entries",
            x.rows(),
            y.len()
        )));
    }
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(SvmError::InvalidParameter(format!(
            "test fraction must be in (0, 1), got {}",
            test_fraction
        )));
    }

    let m = x.rows();
    if m < 2 {
        return Err(SvmError::InvalidInput(
            "need at least two examples to split".to_string(),
        ));
    }
    let n_test = ((m as f64) * test_fraction).round() as usize;
    let n_test = n_test.clamp(1, m - 1);

    let mut indices: Vec<usize> = (0..m).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(n_test);

    Ok(SplitSets {
        train_x: x.select_rows(train_idx),
        train_y: train_idx.iter().map(|&i| y[i]).collect(),
        test_x: x.select_rows(test_idx),
        test_y: test_idx.iter().map(|&i| y[i]).collect(),
    })
}
