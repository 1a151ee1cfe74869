//! Stale score detection.

use crate::domain::inventory::{Asset, Service};
use crate::domain::risk_aggregation::value_objects::{EntityKind, InventorySnapshot, ScoreDrift};
use crate::domain::risk_register::Risk;
use crate::domain::shared::RiskScore;

use super::lookup::Identified;

/// List entities whose stored score differs from the recalculated one.
///
/// `fresh` must be the pipeline output for `stored`; pools are matched by
/// position, which the pipeline preserves. Drift is reported assets first,
/// then services, then risks.
#[must_use]
pub fn detect_drift(stored: &InventorySnapshot, fresh: &InventorySnapshot) -> Vec<ScoreDrift> {
    let assets = pool_drift(EntityKind::Asset, &stored.assets, &fresh.assets);
    let services = pool_drift(EntityKind::Service, &stored.services, &fresh.services);
    let risks = pool_drift(EntityKind::Risk, &stored.risks, &fresh.risks);
    assets.chain(services).chain(risks).collect()
}

trait Scored: Identified {
    fn score(&self) -> Option<RiskScore>;
}

impl Scored for Asset {
    fn score(&self) -> Option<RiskScore> {
        self.risk_score
    }
}

impl Scored for Service {
    fn score(&self) -> Option<RiskScore> {
        self.risk_score
    }
}

impl Scored for Risk {
    fn score(&self) -> Option<RiskScore> {
        self.risk_score
    }
}

fn pool_drift<'a, T: Scored>(
    kind: EntityKind,
    stored: &'a [T],
    fresh: &'a [T],
) -> impl Iterator<Item = ScoreDrift> + 'a {
    stored.iter().zip(fresh).filter_map(move |(before, after)| {
        let recalculated = after.score().unwrap_or_default();
        ScoreDrift::compare(kind, before.id_str(), before.score(), recalculated)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::{CiaLevel, Criticality};
    use crate::domain::risk_aggregation::services::recalculate_all;
    use rust_decimal_macros::dec;

    fn inventory() -> InventorySnapshot {
        InventorySnapshot::new(
            vec![Asset::new("a1")
                .with_cia(CiaLevel::High, CiaLevel::Low, CiaLevel::Low)
                .with_criticality(Criticality::Medium)],
            vec![Service::new("s1").with_dependent_assets(["a1"])],
            vec![Risk::new("r1").with_affected_services(["s1"])],
        )
    }

    #[test]
    fn unscored_inventory_is_entirely_stale() {
        let stored = inventory();
        let drift = detect_drift(&stored, &recalculate_all(&stored));
        let kinds: Vec<_> = drift.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![EntityKind::Asset, EntityKind::Service, EntityKind::Risk]
        );
        assert!(drift.iter().all(|d| d.stored.is_none()));
    }

    #[test]
    fn fresh_inventory_has_no_drift() {
        let fresh = recalculate_all(&inventory());
        assert!(detect_drift(&fresh, &recalculate_all(&fresh)).is_empty());
    }

    #[test]
    fn rating_change_marks_downstream_stale() {
        let mut stored = recalculate_all(&inventory());
        stored.assets[0].criticality = Some(Criticality::Critical);

        let drift = detect_drift(&stored, &recalculate_all(&stored));
        let ids: Vec<_> = drift.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "s1", "r1"]);
        // 2.47 * 2 -> 2.47 * 4
        assert_eq!(drift[0].stored, Some(RiskScore::from_decimal(dec!(4.93))));
        assert_eq!(drift[0].recalculated.value(), dec!(9.87));
    }
}
