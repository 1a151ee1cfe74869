//! Structured logging setup.
//!
//! Installs a `tracing_subscriber::fmt` subscriber writing to stderr, so
//! stdout stays free for JSON reports. `RUST_LOG` overrides the configured
//! level when set.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error type for tracing operations.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    /// Invalid filter directive.
    #[error("invalid log filter '{directives}': {message}")]
    FilterError {
        /// Directive string that failed to parse.
        directives: String,
        /// Parser message.
        message: String,
    },
    /// Failed to initialize tracing subscriber.
    #[error("failed to initialize tracing subscriber: {0}")]
    SubscriberError(String),
}

/// Filter directives for a configured level.
#[must_use]
pub fn filter_directives(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    format!("{level},grc_risk_engine={level}")
}

/// Build the env filter: `RUST_LOG` if set, otherwise the configured level.
///
/// # Errors
///
/// Returns `TracingError::FilterError` if the directives do not parse.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, TracingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directives = filter_directives(&config.level);
    EnvFilter::try_new(&directives).map_err(|e| TracingError::FilterError {
        message: e.to_string(),
        directives,
    })
}

/// Initialize the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TracingError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config)?)
        .with_writer(std::io::stderr);

    let result = match config.format.as_str() {
        "pretty" => builder.pretty().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.json().try_init(),
    };
    result.map_err(|e| TracingError::SubscriberError(e.to_string()))?;

    tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_crate() {
        assert_eq!(filter_directives("DEBUG"), "debug,grc_risk_engine=debug");
    }

    #[test]
    fn directives_parse_for_every_level() {
        for level in crate::config::LOG_LEVELS {
            let filter = EnvFilter::try_new(filter_directives(level));
            assert!(filter.is_ok(), "{level}");
        }
    }

    #[test]
    fn tracing_error_display() {
        let err = TracingError::SubscriberError("already set".to_string());
        assert!(err.to_string().contains("already set"));
    }
}
