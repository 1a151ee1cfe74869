//! Snapshot persistence configuration.

use serde::{Deserialize, Serialize};

/// Snapshot persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Snapshot document to read.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
    /// Where to write the rescored snapshot. Defaults to `snapshot_path`.
    #[serde(default)]
    pub output_path: Option<String>,
    /// Pretty-print written JSON.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            output_path: None,
            pretty: default_pretty(),
        }
    }
}

impl PersistenceConfig {
    /// Effective output path.
    #[must_use]
    pub fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(&self.snapshot_path)
    }
}

fn default_snapshot_path() -> String {
    "./data/snapshot.json".to_string()
}

const fn default_pretty() -> bool {
    true
}
