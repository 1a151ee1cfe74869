//! Inventory Records

mod asset;
mod service;

pub use asset::Asset;
pub use service::Service;
