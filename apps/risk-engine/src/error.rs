//! Top-level error handling for the risk engine.
//!
//! Use cases and the CLI return [`EngineError`]. Each [`ErrorCode`] carries a
//! stable reason string and a process exit code.
//!
//! # Exit Codes
//!
//! | Code | Reason | Usage |
//! |------|--------|-------|
//! | 1 | `INTERNAL_ERROR`, `THREAD_POOL` | Unexpected failure |
//! | 2 | `INVALID_CONFIG`, `INVALID_SCORING_TABLES` | Bad configuration |
//! | 3 | `STALE_SCORES` | `check` found stored scores out of date |
//! | 4 | `MALFORMED_SNAPSHOT` | Snapshot document violates the record shape |
//! | 5 | `SNAPSHOT_IO`, `STORAGE_FAILURE` | Snapshot could not be read or written |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::config::ConfigError;
use crate::domain::risk_aggregation::AggregationError;
use crate::observability::TracingError;

/// Error codes for the risk engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Configuration errors
    /// Configuration could not be loaded or failed validation.
    InvalidConfig,
    /// Scoring tables failed validation.
    InvalidScoringTables,

    // Data errors
    /// Stored scores no longer match their inputs.
    StaleScores,
    /// Snapshot document is structurally invalid.
    MalformedSnapshot,

    // Storage errors
    /// Snapshot file could not be read or written.
    SnapshotIo,
    /// Storage backend failure.
    StorageFailure,

    // Internal errors
    /// Worker pool could not be built.
    ThreadPool,
    /// Internal error.
    InternalError,
}

impl ErrorCode {
    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidConfig => "INVALID_CONFIG",
            Self::InvalidScoringTables => "INVALID_SCORING_TABLES",
            Self::StaleScores => "STALE_SCORES",
            Self::MalformedSnapshot => "MALFORMED_SNAPSHOT",
            Self::SnapshotIo => "SNAPSHOT_IO",
            Self::StorageFailure => "STORAGE_FAILURE",
            Self::ThreadPool => "THREAD_POOL",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ThreadPool | Self::InternalError => 1,
            Self::InvalidConfig | Self::InvalidScoringTables => 2,
            Self::StaleScores => 3,
            Self::MalformedSnapshot => 4,
            Self::SnapshotIo | Self::StorageFailure => 5,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A rich error with context for the risk engine.
#[derive(Debug, Error)]
#[error("[{}] {message}", .code.reason())]
pub struct EngineError {
    code: ErrorCode,
    message: String,
    context: Vec<(String, String)>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl EngineError {
    /// Create a new engine error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
            source: None,
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Attach the underlying cause.
    #[must_use]
    pub fn with_source(
        mut self,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }
}

/// Convenience constructors for common errors.
impl EngineError {
    /// Stored scores are out of date.
    #[must_use]
    pub fn stale_scores(count: usize) -> Self {
        Self::new(
            ErrorCode::StaleScores,
            format!("{count} stored risk scores are stale"),
        )
        .with_context("stale", count.to_string())
    }

    /// Internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<RepositoryError> for EngineError {
    fn from(err: RepositoryError) -> Self {
        let (code, path) = match &err {
            RepositoryError::Io { path, .. } => (ErrorCode::SnapshotIo, Some(path.clone())),
            RepositoryError::Malformed { path, .. } => {
                (ErrorCode::MalformedSnapshot, Some(path.clone()))
            }
            RepositoryError::Encode(_) => (ErrorCode::InternalError, None),
            RepositoryError::Storage(_) => (ErrorCode::StorageFailure, None),
        };
        let mut error = Self::new(code, err.to_string());
        if let Some(path) = path {
            error = error.with_context("path", path.display().to_string());
        }
        error.with_source(err)
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorCode::InvalidConfig, err.to_string()).with_source(err)
    }
}

impl From<AggregationError> for EngineError {
    fn from(err: AggregationError) -> Self {
        let code = match &err {
            AggregationError::InvalidTables { .. } => ErrorCode::InvalidScoringTables,
            AggregationError::ThreadPool { .. } => ErrorCode::ThreadPool,
        };
        Self::new(code, err.to_string()).with_source(err)
    }
}

impl From<TracingError> for EngineError {
    fn from(err: TracingError) -> Self {
        Self::new(ErrorCode::InvalidConfig, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        let message = format!("Failed to encode output: {err}");
        Self::new(ErrorCode::InternalError, message).with_source(err)
    }
}
