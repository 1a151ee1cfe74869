//! Service business tier.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;
use crate::domain::shared::serde_helpers::{WireRating, rating_from_value};

/// Business tier of a service, driving its rollup multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceType {
    /// Outage stops the business.
    BusinessCritical,
    /// Outage degrades the business.
    BusinessImportant,
    /// Internal support function.
    BusinessSupport,
    /// Non-production environment.
    Development,
    /// Any tier the inventory does not define, kept as written.
    Unrecognized(Value),
}

impl ServiceType {
    /// Wire name of the tier, or the raw text of an unrecognized one.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::BusinessCritical => "business_critical",
            Self::BusinessImportant => "business_important",
            Self::BusinessSupport => "business_support",
            Self::Development => "development",
            Self::Unrecognized(raw) => raw.as_str().unwrap_or("unrecognized"),
        }
    }
}

impl WireRating for ServiceType {
    fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "business_critical" => Some(Self::BusinessCritical),
            "business_important" => Some(Self::BusinessImportant),
            "business_support" => Some(Self::BusinessSupport),
            "development" => Some(Self::Development),
            _ => None,
        }
    }

    fn unrecognized(raw: Value) -> Self {
        Self::Unrecognized(raw)
    }
}

impl Serialize for ServiceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unrecognized(raw) => raw.serialize(serializer),
            known => serializer.serialize_str(known.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for ServiceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rating_from_value(deserializer)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(raw) if !raw.is_string() => write!(f, "{raw}"),
            tier => f.write_str(tier.as_str()),
        }
    }
}

impl FromStr for ServiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::from_wire_name(&name).ok_or_else(|| DomainError::UnknownVariant {
            kind: "ServiceType".to_string(),
            value: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_type_serde() {
        let json = serde_json::to_string(&ServiceType::BusinessCritical).unwrap();
        assert_eq!(json, "\"business_critical\"");

        let parsed: ServiceType = serde_json::from_str("\"development\"").unwrap();
        assert_eq!(parsed, ServiceType::Development);
    }

    #[test]
    fn unknown_tier_is_unrecognized() {
        let parsed: ServiceType = serde_json::from_str("\"Business_Critical\"").unwrap();
        assert_eq!(
            parsed,
            ServiceType::Unrecognized(Value::from("Business_Critical"))
        );
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            "\"Business_Critical\""
        );
    }

    #[test]
    fn boolean_tier_is_unrecognized() {
        let parsed: ServiceType = serde_json::from_str("true").unwrap();
        assert_eq!(parsed, ServiceType::Unrecognized(Value::Bool(true)));
        assert_eq!(parsed.to_string(), "true");
    }

    #[test]
    fn from_str_round_trips_wire_names() {
        for tier in [
            ServiceType::BusinessCritical,
            ServiceType::BusinessImportant,
            ServiceType::BusinessSupport,
            ServiceType::Development,
        ] {
            assert_eq!(tier.as_str().parse::<ServiceType>().unwrap(), tier);
        }
        assert!("prod".parse::<ServiceType>().is_err());
    }
}
