//! Core traits for SVM training

/// Source of the second working index during an SMO step
///
/// The simplified SMO pairs a KKT-violating index `i` with a uniformly
/// random `j != i`. The generator is injected rather than ambient so that
/// training is deterministic under a fixed seed.
pub trait IndexSampler {
    /// Draw an index from `0..upper`, never returning `exclude`
    ///
    /// # Panics
    /// Panics if `upper < 2` (no valid index exists)
    fn next_index_excluding(&mut self, exclude: usize, upper: usize) -> usize;
}

/// Observer for training progress
///
/// The solver performs no I/O of its own; callers that want progress
/// reporting hook it in here.
pub trait TrainingObserver {
    /// Called once per full pass over the training set
    fn on_pass_completed(&mut self, pass: usize, changed: usize);
}

/// Observer that ignores all progress events
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl TrainingObserver for SilentObserver {
    fn on_pass_completed(&mut self, _pass: usize, _changed: usize) {}
}
