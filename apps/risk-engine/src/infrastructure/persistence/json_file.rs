//! JSON file inventory repository.
//!
//! Reads a snapshot document from one path and writes the recalculated
//! snapshot to an output path (the input path unless overridden). Writes go
//! to a temporary sibling first and are renamed into place.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::ports::{InventoryRepositoryPort, RepositoryError};
use crate::domain::risk_aggregation::InventorySnapshot;

/// Snapshot persistence backed by a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileInventoryRepository {
    input_path: PathBuf,
    output_path: PathBuf,
    pretty: bool,
}

impl JsonFileInventoryRepository {
    /// Read from and write to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let input_path = path.into();
        Self {
            output_path: input_path.clone(),
            input_path,
            pretty: true,
        }
    }

    /// Write to `path` instead of the input file.
    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Whether to pretty-print written JSON.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Path snapshots are read from.
    #[must_use]
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Path snapshots are written to.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .output_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.output_path.with_file_name(name)
    }

    fn output_dir(&self) -> Option<&Path> {
        let parent = self.output_path.parent()?;
        (!parent.as_os_str().is_empty()).then_some(parent)
    }
}

#[async_trait]
impl InventoryRepositoryPort for JsonFileInventoryRepository {
    async fn load_snapshot(&self) -> Result<InventorySnapshot, RepositoryError> {
        let bytes = tokio::fs::read(&self.input_path)
            .await
            .map_err(|source| RepositoryError::Io {
                path: self.input_path.clone(),
                source,
            })?;
        let snapshot: InventorySnapshot =
            serde_json::from_slice(&bytes).map_err(|source| RepositoryError::Malformed {
                path: self.input_path.clone(),
                source,
            })?;
        debug!(path = %self.input_path.display(), entities = snapshot.len(), "Snapshot loaded");
        Ok(snapshot)
    }

    async fn save_snapshot(&self, snapshot: &InventorySnapshot) -> Result<(), RepositoryError> {
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(snapshot)
        } else {
            serde_json::to_vec(snapshot)
        }
        .map_err(RepositoryError::Encode)?;
        bytes.push(b'\n');

        if let Some(parent) = self.output_dir() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| RepositoryError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, &bytes)
            .await
            .map_err(|source| RepositoryError::Io {
                path: temp.clone(),
                source,
            })?;
        if let Err(source) = tokio::fs::rename(&temp, &self.output_path).await {
            if let Err(e) = tokio::fs::remove_file(&temp).await {
                warn!(path = %temp.display(), error = %e, "Failed to remove temp snapshot");
            }
            return Err(RepositoryError::Io {
                path: self.output_path.clone(),
                source,
            });
        }

        debug!(path = %self.output_path.display(), entities = snapshot.len(), "Snapshot saved");
        Ok(())
    }
}
