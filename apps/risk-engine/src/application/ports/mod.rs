//! Application Ports (Driver and Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! - **Driven Ports** (Secondary/Outbound): How our application uses external systems

mod inventory_repository_port;

pub use inventory_repository_port::{
    InMemoryInventoryRepository, InventoryRepositoryPort, RepositoryError,
};
