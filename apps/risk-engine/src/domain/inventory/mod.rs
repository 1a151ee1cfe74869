//! Inventory Bounded Context
//!
//! Assets and the business services built on them.
//!
//! # Key Concepts
//!
//! - **Asset**: Rated on confidentiality, integrity and availability impact plus criticality
//! - **Service**: References its dependent assets and the services it depends on
//! - **Ratings**: Ratings outside the table map to `Unrecognized`, keeping their raw value

pub mod aggregate;
pub mod value_objects;

pub use aggregate::{Asset, Service};
pub use value_objects::{AssetType, CiaLevel, Criticality, ServiceType};
