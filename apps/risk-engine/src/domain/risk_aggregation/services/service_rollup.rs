//! Asset-to-service rollup.

use rust_decimal::Decimal;

use crate::domain::inventory::Service;
use crate::domain::risk_aggregation::value_objects::{FLOOR_SCORE, ScoringTables};
use crate::domain::shared::{AssetId, RiskScore};

/// Roll dependent asset scores up into a service score.
///
/// `resolve` maps each dependent asset id to its score; ids it cannot resolve
/// are skipped. With nothing resolved (or no service) the result is
/// [`FLOOR_SCORE`]. Otherwise the mean asset score is scaled by the service
/// type multiplier and the dependency-count multiplier.
pub fn roll_up_service<F>(
    tables: &ScoringTables,
    service: Option<&Service>,
    resolve: F,
) -> RiskScore
where
    F: Fn(&AssetId) -> Option<RiskScore>,
{
    let Some(service) = service else {
        return FLOOR_SCORE;
    };

    let mut total = Decimal::ZERO;
    let mut resolved: u64 = 0;
    for score in service.dependent_assets.iter().filter_map(&resolve) {
        total = total.saturating_add(score.value());
        resolved += 1;
    }
    if resolved == 0 {
        return FLOOR_SCORE;
    }

    let base_risk = total / Decimal::from(resolved);
    let service_type = service.service_type.as_ref();
    let type_multiplier = tables.service_type.multiplier(service_type);
    let dependency_multiplier = tables.dependency_multiplier(service.dependencies.len());

    RiskScore::from_decimal(
        base_risk
            .saturating_mul(type_multiplier)
            .saturating_mul(dependency_multiplier),
    )
}
