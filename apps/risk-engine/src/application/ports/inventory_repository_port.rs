//! Inventory Repository Port (Driven Port)
//!
//! Interface for loading and persisting inventory snapshots.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::risk_aggregation::InventorySnapshot;

/// Errors from snapshot persistence.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot document is not valid (e.g. a pool or id list is not an array).
    #[error("Malformed snapshot {}: {source}", .path.display())]
    Malformed {
        /// File involved.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot could not be encoded.
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// Backend-specific storage failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Port for snapshot persistence.
///
/// Writes are last-write-wins; the engine itself holds no locks.
#[async_trait]
pub trait InventoryRepositoryPort: Send + Sync {
    /// Load the current snapshot.
    async fn load_snapshot(&self) -> Result<InventorySnapshot, RepositoryError>;

    /// Replace the stored snapshot.
    async fn save_snapshot(&self, snapshot: &InventorySnapshot) -> Result<(), RepositoryError>;
}

/// In-memory implementation for testing.
#[derive(Debug, Default)]
pub struct InMemoryInventoryRepository {
    snapshot: std::sync::RwLock<InventorySnapshot>,
}

impl InMemoryInventoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: InventorySnapshot) -> Self {
        Self {
            snapshot: std::sync::RwLock::new(snapshot),
        }
    }

    /// Copy of the stored snapshot.
    #[must_use]
    pub fn current(&self) -> InventorySnapshot {
        self.snapshot
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl InventoryRepositoryPort for InMemoryInventoryRepository {
    async fn load_snapshot(&self) -> Result<InventorySnapshot, RepositoryError> {
        Ok(self.current())
    }

    async fn save_snapshot(&self, snapshot: &InventorySnapshot) -> Result<(), RepositoryError> {
        let mut stored = self
            .snapshot
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *stored = snapshot.clone();
        drop(stored);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::Asset;

    #[tokio::test]
    async fn in_memory_starts_empty() {
        let repo = InMemoryInventoryRepository::new();
        assert!(repo.load_snapshot().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn in_memory_save_and_load() {
        let repo = InMemoryInventoryRepository::new();
        let snapshot = InventorySnapshot::new(vec![Asset::new("a1")], vec![], vec![]);

        repo.save_snapshot(&snapshot).await.unwrap();

        assert_eq!(repo.load_snapshot().await.unwrap(), snapshot);
    }

    #[tokio::test]
    async fn in_memory_save_replaces() {
        let repo = InMemoryInventoryRepository::with_snapshot(InventorySnapshot::new(
            vec![Asset::new("a1"), Asset::new("a2")],
            vec![],
            vec![],
        ));
        repo.save_snapshot(&InventorySnapshot::default())
            .await
            .unwrap();
        assert!(repo.current().is_empty());
    }

    #[test]
    fn repository_error_display() {
        let err = RepositoryError::Io {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/missing.json"));
        let storage = RepositoryError::Storage("down".into());
        assert!(storage.to_string().contains("down"));
    }
}
