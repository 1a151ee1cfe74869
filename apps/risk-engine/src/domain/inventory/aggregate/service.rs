//! Service record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::inventory::value_objects::ServiceType;
use crate::domain::shared::serde_helpers::null_as_default;
use crate::domain::shared::{AssetId, RiskScore, ServiceId};

/// A business service whose risk is rolled up from the assets it runs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Service identifier.
    pub id: ServiceId,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Business tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
    /// Assets this service's risk is computed from, in declared order.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dependent_assets: Vec<AssetId>,
    /// Other services this one calls. Only the count is used.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dependencies: Vec<ServiceId>,
    /// Last computed risk score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<RiskScore>,
    /// Descriptive fields carried through untouched.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl Service {
    /// Create a service with no assets and no dependencies.
    #[must_use]
    pub fn new(id: impl Into<ServiceId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            service_type: None,
            dependent_assets: Vec::new(),
            dependencies: Vec::new(),
            risk_score: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Set the business tier.
    #[must_use]
    pub fn with_service_type(mut self, service_type: ServiceType) -> Self {
        self.service_type = Some(service_type);
        self
    }

    /// Set the dependent asset ids.
    #[must_use]
    pub fn with_dependent_assets<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<AssetId>,
    {
        self.dependent_assets = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the service dependencies.
    #[must_use]
    pub fn with_dependencies<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ServiceId>,
    {
        self.dependencies = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Copy of this service carrying `score`.
    #[must_use]
    pub fn with_risk_score(&self, score: RiskScore) -> Self {
        Self {
            risk_score: Some(score),
            ..self.clone()
        }
    }
}
