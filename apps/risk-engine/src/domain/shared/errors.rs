//! Domain errors for the risk engine.

use std::fmt;

/// Domain-level errors that can occur in business logic.
///
/// Ordinary data variation (unknown ratings, unresolved ids, empty
/// collections) is never reported through this type; it resolves to a
/// documented default instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid value for a field.
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Unrecognized text for an enumerated rating.
    UnknownVariant {
        /// Enumeration name (e.g., "CiaLevel").
        kind: String,
        /// The text that failed to parse.
        value: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::UnknownVariant { kind, value } => {
                write!(f, "Unknown {kind} value: '{value}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_invalid_value_display() {
        let err = DomainError::InvalidValue {
            field: "risk_score".to_string(),
            message: "must not be negative".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("risk_score"));
        assert!(msg.contains("negative"));
    }

    #[test]
    fn domain_error_unknown_variant_display() {
        let err = DomainError::UnknownVariant {
            kind: "Criticality".to_string(),
            value: "severe".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("Criticality"));
        assert!(msg.contains("severe"));
    }

    #[test]
    fn domain_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DomainError::InvalidValue {
            field: "x".to_string(),
            message: "y".to_string(),
        });
        assert!(!err.to_string().is_empty());
    }
}
