//! SVM solver implementation
//!
//! This module implements the simplified SMO algorithm: two-variable
//! analytic updates with a uniformly random second index and a
//! stall-counter convergence test.

pub mod sampler;
pub mod smo;

pub use self::sampler::*;
pub use self::smo::*;
