//! Persistence Adapters
//!
//! File implementations of the inventory repository port. The in-memory
//! adapter lives beside the port.

pub mod json_file;

pub use json_file::JsonFileInventoryRepository;
