//! Recalculation pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::domain::risk_aggregation::{AggregationError, Parallelism};

/// Recalculation pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalculationConfig {
    /// Maximum number of worker threads (0 = rayon default).
    #[serde(default)]
    pub max_threads: usize,
    /// Minimum stage size evaluated in parallel (smaller stages run sequentially).
    #[serde(default = "default_min_parallel_items")]
    pub min_parallel_items: usize,
}

impl Default for RecalculationConfig {
    fn default() -> Self {
        Self {
            max_threads: 0,
            min_parallel_items: default_min_parallel_items(),
        }
    }
}

impl RecalculationConfig {
    /// Stage parallelism for the engine.
    #[must_use]
    pub const fn parallelism(&self) -> Parallelism {
        Parallelism::new(self.min_parallel_items)
    }

    /// Configure the global rayon thread pool.
    ///
    /// # Errors
    ///
    /// Returns error if the global pool was already built.
    pub fn configure_thread_pool(&self) -> Result<(), AggregationError> {
        if self.max_threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(self.max_threads)
                .build_global()
                .map_err(|e| AggregationError::ThreadPool {
                    message: e.to_string(),
                })?;
        }
        Ok(())
    }
}

const fn default_min_parallel_items() -> usize {
    Parallelism::DEFAULT_MIN_PARALLEL_ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_rayon_threads() {
        let config = RecalculationConfig::default();
        assert_eq!(config.max_threads, 0);
        assert_eq!(config.parallelism(), Parallelism::default());
        assert!(config.configure_thread_pool().is_ok());
    }
}
