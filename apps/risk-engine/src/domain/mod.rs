//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Records**: Assets, services and risks as supplied by the caller
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless scoring logic
//!
//! # Bounded Contexts
//!
//! - [`inventory`]: Assets and the business services built on them
//! - [`risk_register`]: Top-level risk entries
//! - [`risk_aggregation`]: Scoring tables, rollups and the recalculation pipeline

pub mod inventory;
pub mod risk_aggregation;
pub mod risk_register;
pub mod shared;
