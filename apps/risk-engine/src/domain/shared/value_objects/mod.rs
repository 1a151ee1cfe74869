//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod identifiers;
mod risk_score;

pub use identifiers::{AssetId, RiskId, RunId, ServiceId};
pub use risk_score::{RiskScore, SCORE_DECIMAL_PLACES};
