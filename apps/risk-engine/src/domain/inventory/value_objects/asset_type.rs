//! Asset classification.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::domain::shared::serde_helpers::{WireRating, rating_from_value};

/// Kind of inventory asset. Descriptive only; scoring ignores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetType {
    /// Data sets, records, documents.
    Information,
    /// Applications and system software.
    Software,
    /// Hardware, facilities, media.
    Physical,
    /// People and roles.
    Personnel,
    /// Externally provided or supporting services.
    Service,
    /// Reputation, intellectual property, brand.
    Intangible,
    /// Any type the inventory does not define, kept as written.
    Unrecognized(Value),
}

impl AssetType {
    /// Wire name of the type, or the raw text of an unrecognized one.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Information => "information",
            Self::Software => "software",
            Self::Physical => "physical",
            Self::Personnel => "personnel",
            Self::Service => "service",
            Self::Intangible => "intangible",
            Self::Unrecognized(raw) => raw.as_str().unwrap_or("unrecognized"),
        }
    }
}

impl WireRating for AssetType {
    fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "information" => Some(Self::Information),
            "software" => Some(Self::Software),
            "physical" => Some(Self::Physical),
            "personnel" => Some(Self::Personnel),
            "service" => Some(Self::Service),
            "intangible" => Some(Self::Intangible),
            _ => None,
        }
    }

    fn unrecognized(raw: Value) -> Self {
        Self::Unrecognized(raw)
    }
}

impl Serialize for AssetType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unrecognized(raw) => raw.serialize(serializer),
            known => serializer.serialize_str(known.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for AssetType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rating_from_value(deserializer)
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(raw) if !raw.is_string() => write!(f, "{raw}"),
            kind => f.write_str(kind.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_type_serde() {
        let parsed: AssetType = serde_json::from_str("\"intangible\"").unwrap();
        assert_eq!(parsed, AssetType::Intangible);
        assert_eq!(
            serde_json::to_string(&AssetType::Software).unwrap(),
            "\"software\""
        );
    }

    #[test]
    fn unknown_type_keeps_its_text() {
        let parsed: AssetType = serde_json::from_str("\"cloud\"").unwrap();
        assert_eq!(parsed, AssetType::Unrecognized(Value::from("cloud")));
        assert_eq!(parsed.to_string(), "cloud");
    }
}
