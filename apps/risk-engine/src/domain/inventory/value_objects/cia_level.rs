//! CIA impact level (confidentiality, integrity, availability).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;
use crate::domain::shared::serde_helpers::{WireRating, rating_from_value};

/// Impact rating for one CIA dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CiaLevel {
    /// Limited adverse effect.
    Low,
    /// Serious adverse effect.
    Moderate,
    /// Severe or catastrophic adverse effect.
    High,
    /// Any rating the inventory does not define, kept as written.
    Unrecognized(Value),
}

impl CiaLevel {
    /// Wire name of the level, or the raw text of an unrecognized one.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Unrecognized(raw) => raw.as_str().unwrap_or("unrecognized"),
        }
    }
}

impl WireRating for CiaLevel {
    fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    fn unrecognized(raw: Value) -> Self {
        Self::Unrecognized(raw)
    }
}

impl Serialize for CiaLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unrecognized(raw) => raw.serialize(serializer),
            known => serializer.serialize_str(known.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for CiaLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rating_from_value(deserializer)
    }
}

impl fmt::Display for CiaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(raw) if !raw.is_string() => write!(f, "{raw}"),
            level => f.write_str(level.as_str()),
        }
    }
}

impl FromStr for CiaLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::from_wire_name(&name).ok_or_else(|| DomainError::UnknownVariant {
            kind: "CiaLevel".to_string(),
            value: s.to_string(),
        })
    }
}
