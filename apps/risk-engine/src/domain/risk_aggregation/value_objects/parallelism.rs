//! Stage evaluation threshold.

/// Controls when a recalculation stage is evaluated on the rayon pool.
///
/// A stage holding fewer than `min_parallel_items` entries runs on the
/// calling thread. Either way the output order matches the input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parallelism {
    /// Minimum stage size for parallel evaluation.
    pub min_parallel_items: usize,
}

impl Parallelism {
    /// Default threshold.
    pub const DEFAULT_MIN_PARALLEL_ITEMS: usize = 64;

    /// Create with an explicit threshold.
    #[must_use]
    pub const fn new(min_parallel_items: usize) -> Self {
        Self { min_parallel_items }
    }

    /// Never parallelize.
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            min_parallel_items: usize::MAX,
        }
    }

    /// Whether a stage of `len` items runs in parallel.
    #[must_use]
    pub const fn is_parallel(&self, len: usize) -> bool {
        len >= self.min_parallel_items
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_PARALLEL_ITEMS)
    }
}
