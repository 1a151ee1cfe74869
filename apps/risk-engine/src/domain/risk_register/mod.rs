//! Risk Register Bounded Context
//!
//! Top-level risk entries rated by probability and impact and linked to the
//! services they affect.

pub mod aggregate;

pub use aggregate::Risk;
