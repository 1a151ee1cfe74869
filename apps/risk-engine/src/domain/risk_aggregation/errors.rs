//! Risk aggregation errors.

use std::fmt;

/// Errors raised while configuring or running the aggregation engine.
///
/// Scoring itself never fails; these cover table validation and the
/// worker pool used for parallel stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregationError {
    /// A scoring table entry is out of range.
    InvalidTables {
        /// Table field path.
        field: String,
        /// Error message.
        message: String,
    },

    /// The stage worker pool could not be built.
    ThreadPool {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for AggregationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTables { field, message } => {
                write!(f, "Invalid scoring table [{field}]: {message}")
            }
            Self::ThreadPool { message } => {
                write!(f, "Failed to build stage worker pool: {message}")
            }
        }
    }
}

impl std::error::Error for AggregationError {}
