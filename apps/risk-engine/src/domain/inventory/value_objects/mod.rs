//! Inventory Value Objects
//!
//! Enumerated ratings carried by assets and services.

mod asset_type;
mod cia_level;
mod criticality;
mod service_type;

pub use asset_type::AssetType;
pub use cia_level::CiaLevel;
pub use criticality::Criticality;
pub use service_type::ServiceType;
