//! Seedable uniform index sampler for the SMO working pair

use crate::core::IndexSampler;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform sampler over `0..upper` excluding one index
///
/// Uses rejection sampling: draw, retry while the draw equals the excluded
/// index. Every admissible index has equal probability.
#[derive(Debug)]
pub struct UniformIndexSampler {
    rng: StdRng,
}

impl UniformIndexSampler {
    /// Create a sampler with a fixed seed for reproducible training
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a sampler seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl IndexSampler for UniformIndexSampler {
    fn next_index_excluding(&mut self, exclude: usize, upper: usize) -> usize {
        assert!(upper >= 2, "need at least two candidate indices");
        let mut j = self.rng.gen_range(0..upper);
        while j == exclude {
            j = self.rng.gen_range(0..upper);
        }
        j
    }
}
