//! Default-table entry points.

use crate::domain::inventory::{Asset, Service};
use crate::domain::risk_aggregation::value_objects::{InventorySnapshot, Parallelism};
use crate::domain::risk_register::Risk;
use crate::domain::shared::RiskScore;

use super::RiskAggregationService;

/// Score one asset with the default tables.
#[must_use]
pub fn compute_asset_risk_score(asset: Option<&Asset>) -> RiskScore {
    RiskAggregationService::with_default_tables().compute_asset_risk_score(asset)
}

/// Score one service against `assets` with the default tables.
#[must_use]
pub fn compute_service_risk_score(service: Option<&Service>, assets: &[Asset]) -> RiskScore {
    RiskAggregationService::with_default_tables().compute_service_risk_score(service, assets)
}

/// Score one risk against `services` with the default tables.
#[must_use]
pub fn compute_risk_score_from_services(risk: Option<&Risk>, services: &[Service]) -> RiskScore {
    RiskAggregationService::with_default_tables().compute_risk_score_from_services(risk, services)
}

/// Recalculate `snapshot` with the default tables and parallelism.
#[must_use]
pub fn recalculate_all(snapshot: &InventorySnapshot) -> InventorySnapshot {
    RiskAggregationService::with_default_tables().recalculate(snapshot, Parallelism::default())
}
