//! Entity kind tag used in diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which inventory pool an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Inventory asset.
    Asset,
    /// Business service.
    Service,
    /// Risk register entry.
    Risk,
}

impl EntityKind {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Service => "service",
            Self::Risk => "risk",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
