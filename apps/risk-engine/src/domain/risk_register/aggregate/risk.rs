//! Risk register entry.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::shared::serde_helpers::null_as_default;
use crate::domain::shared::{RiskId, RiskScore, ServiceId};

/// A top-level risk whose score is rolled up from the services it affects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    /// Risk identifier.
    pub id: RiskId,
    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Likelihood rating, conventionally 1-5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<Decimal>,
    /// Impact rating, conventionally 1-5. Only used when no service resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<Decimal>,
    /// Services exposed to this risk.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub affected_services: Vec<ServiceId>,
    /// Last computed risk score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<RiskScore>,
    /// Descriptive fields carried through untouched.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl Risk {
    /// Create an unrated risk with no affected services.
    #[must_use]
    pub fn new(id: impl Into<RiskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            probability: None,
            impact: None,
            affected_services: Vec::new(),
            risk_score: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Set probability and impact.
    #[must_use]
    pub fn with_rating(mut self, probability: Decimal, impact: Decimal) -> Self {
        self.probability = Some(probability);
        self.impact = Some(impact);
        self
    }

    /// Set only the probability.
    #[must_use]
    pub fn with_probability(mut self, probability: Decimal) -> Self {
        self.probability = Some(probability);
        self
    }

    /// Set the affected service ids.
    #[must_use]
    pub fn with_affected_services<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ServiceId>,
    {
        self.affected_services = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Probability, defaulting to 1 when unrated.
    #[must_use]
    pub fn probability_or_default(&self) -> Decimal {
        self.probability.unwrap_or(Decimal::ONE)
    }

    /// Impact, defaulting to 1 when unrated.
    #[must_use]
    pub fn impact_or_default(&self) -> Decimal {
        self.impact.unwrap_or(Decimal::ONE)
    }

    /// Copy of this risk carrying `score`.
    #[must_use]
    pub fn with_risk_score(&self, score: RiskScore) -> Self {
        Self {
            risk_score: Some(score),
            ..self.clone()
        }
    }
}
