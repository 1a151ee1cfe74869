//! Observability module for structured logging.

mod tracing;

pub use self::tracing::{TracingError, build_env_filter, filter_directives, init_tracing};
