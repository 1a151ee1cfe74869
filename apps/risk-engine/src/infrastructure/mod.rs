//! Infrastructure Layer
//!
//! This module contains adapters (implementations) for the ports defined
//! in the application layer. Following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**: Implement ports for external systems
//!   - `persistence/`: JSON snapshot files

pub mod persistence;

pub use persistence::JsonFileInventoryRepository;
