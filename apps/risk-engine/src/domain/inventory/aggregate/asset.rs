//! Asset record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::inventory::value_objects::{AssetType, CiaLevel, Criticality};
use crate::domain::shared::{AssetId, RiskScore};

/// An inventory asset rated on the CIA triad and criticality.
///
/// Fields the engine does not read are kept in `attributes` so a snapshot
/// survives a load/save round trip unchanged apart from `risk_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Asset identifier.
    pub id: AssetId,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Accountable owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Asset classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    /// Confidentiality impact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidentiality_impact: Option<CiaLevel>,
    /// Integrity impact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity_impact: Option<CiaLevel>,
    /// Availability impact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_impact: Option<CiaLevel>,
    /// Business criticality tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criticality: Option<Criticality>,
    /// Last computed risk score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<RiskScore>,
    /// Descriptive fields carried through untouched.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl Asset {
    /// Create an unrated asset.
    #[must_use]
    pub fn new(id: impl Into<AssetId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            owner: None,
            asset_type: None,
            confidentiality_impact: None,
            integrity_impact: None,
            availability_impact: None,
            criticality: None,
            risk_score: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Set all three CIA impacts.
    #[must_use]
    pub fn with_cia(
        mut self,
        confidentiality: CiaLevel,
        integrity: CiaLevel,
        availability: CiaLevel,
    ) -> Self {
        self.confidentiality_impact = Some(confidentiality);
        self.integrity_impact = Some(integrity);
        self.availability_impact = Some(availability);
        self
    }

    /// Set the criticality tier.
    #[must_use]
    pub fn with_criticality(mut self, criticality: Criticality) -> Self {
        self.criticality = Some(criticality);
        self
    }

    /// Set the asset type.
    #[must_use]
    pub fn with_asset_type(mut self, asset_type: AssetType) -> Self {
        self.asset_type = Some(asset_type);
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Copy of this asset carrying `score`.
    #[must_use]
    pub fn with_risk_score(&self, score: RiskScore) -> Self {
        Self {
            risk_score: Some(score),
            ..self.clone()
        }
    }
}
