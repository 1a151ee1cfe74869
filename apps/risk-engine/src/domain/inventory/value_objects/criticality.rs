//! Asset criticality tier.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;
use crate::domain::shared::serde_helpers::{WireRating, rating_from_value};

/// Business-impact tier of an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criticality {
    /// Low business impact.
    Low,
    /// Medium business impact.
    Medium,
    /// High business impact.
    High,
    /// Business cannot operate without the asset.
    Critical,
    /// Any tier the inventory does not define, kept as written.
    Unrecognized(Value),
}

impl Criticality {
    /// Wire name of the tier, or the raw text of an unrecognized one.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Unrecognized(raw) => raw.as_str().unwrap_or("unrecognized"),
        }
    }
}

impl WireRating for Criticality {
    fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    fn unrecognized(raw: Value) -> Self {
        Self::Unrecognized(raw)
    }
}

impl Serialize for Criticality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unrecognized(raw) => raw.serialize(serializer),
            known => serializer.serialize_str(known.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for Criticality {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rating_from_value(deserializer)
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(raw) if !raw.is_string() => write!(f, "{raw}"),
            tier => f.write_str(tier.as_str()),
        }
    }
}

impl FromStr for Criticality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::from_wire_name(&name).ok_or_else(|| DomainError::UnknownVariant {
            kind: "Criticality".to_string(),
            value: s.to_string(),
        })
    }
}
