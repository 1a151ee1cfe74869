//! Shared Domain Types
//!
//! Value objects, errors and serde helpers shared across bounded contexts.

pub mod errors;
pub mod serde_helpers;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::{AssetId, RiskId, RiskScore, RunId, SCORE_DECIMAL_PLACES, ServiceId};
