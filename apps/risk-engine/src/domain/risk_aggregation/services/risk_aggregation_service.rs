//! Risk Aggregation Service
//!
//! Scores assets, services and risks, and sequences the three stages of a
//! full recalculation.

use rayon::prelude::*;

use crate::domain::inventory::{Asset, Service};
use crate::domain::risk_aggregation::errors::AggregationError;
use crate::domain::risk_aggregation::value_objects::{InventorySnapshot, Parallelism, ScoringTables};
use crate::domain::risk_register::Risk;
use crate::domain::shared::RiskScore;

use super::asset_scoring::score_asset;
use super::lookup::IdIndex;
use super::risk_rollup::roll_up_risk;
use super::service_rollup::roll_up_service;

/// Risk Aggregation Service - stateless scoring over caller-supplied data.
#[derive(Debug, Clone, Default)]
pub struct RiskAggregationService {
    tables: ScoringTables,
}

impl RiskAggregationService {
    /// Create a service scoring with `tables`.
    ///
    /// # Errors
    ///
    /// Returns `AggregationError::InvalidTables` if the tables fail validation.
    pub fn new(tables: ScoringTables) -> Result<Self, AggregationError> {
        tables.validate()?;
        Ok(Self { tables })
    }

    /// Create with default tables.
    #[must_use]
    pub fn with_default_tables() -> Self {
        Self::default()
    }

    /// Tables in use.
    #[must_use]
    pub const fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    /// Score one asset from its ratings. An absent asset scores zero.
    #[must_use]
    pub fn compute_asset_risk_score(&self, asset: Option<&Asset>) -> RiskScore {
        score_asset(&self.tables, asset)
    }

    /// Score one service against an asset pool.
    ///
    /// Dependent assets are scored from their ratings; any score they carry
    /// is ignored. Pool order and unrelated assets do not affect the result.
    #[must_use]
    pub fn compute_service_risk_score(
        &self,
        service: Option<&Service>,
        assets: &[Asset],
    ) -> RiskScore {
        let index = IdIndex::new(assets);
        roll_up_service(&self.tables, service, |id| {
            index
                .get(id.as_str())
                .map(|asset| score_asset(&self.tables, Some(asset)))
        })
    }

    /// Score one risk from the scores its affected services already carry.
    #[must_use]
    pub fn compute_risk_score_from_services(
        &self,
        risk: Option<&Risk>,
        services: &[Service],
    ) -> RiskScore {
        let index = IdIndex::new(services);
        roll_up_risk(risk, |id| index.get(id.as_str()).and_then(|s| s.risk_score))
    }

    /// Stage 1: every asset with a fresh score.
    #[must_use]
    pub fn score_assets(&self, assets: &[Asset], parallelism: Parallelism) -> Vec<Asset> {
        map_stage(assets, parallelism, |asset| {
            asset.with_risk_score(score_asset(&self.tables, Some(asset)))
        })
    }

    /// Stage 2: every service scored against `assets`.
    ///
    /// Reads the score each asset carries, so `assets` should be the output
    /// of [`Self::score_assets`]. Unscored assets are scored from their ratings.
    #[must_use]
    pub fn score_services(
        &self,
        services: &[Service],
        assets: &[Asset],
        parallelism: Parallelism,
    ) -> Vec<Service> {
        let index = IdIndex::new(assets);
        map_stage(services, parallelism, |service| {
            let score = roll_up_service(&self.tables, Some(service), |id| {
                index.get(id.as_str()).map(|asset| {
                    asset
                        .risk_score
                        .unwrap_or_else(|| score_asset(&self.tables, Some(asset)))
                })
            });
            service.with_risk_score(score)
        })
    }

    /// Stage 3: every risk scored against `services`.
    ///
    /// Reads the score each service carries, so `services` should be the
    /// output of [`Self::score_services`].
    #[must_use]
    pub fn score_risks(
        &self,
        risks: &[Risk],
        services: &[Service],
        parallelism: Parallelism,
    ) -> Vec<Risk> {
        let index = IdIndex::new(services);
        map_stage(risks, parallelism, |risk| {
            let score = roll_up_risk(Some(risk), |id| {
                index.get(id.as_str()).and_then(|s| s.risk_score)
            });
            risk.with_risk_score(score)
        })
    }

    /// Recalculate a whole snapshot: assets, then services, then risks.
    ///
    /// The input is left untouched. Output pools keep input order.
    #[must_use]
    pub fn recalculate(
        &self,
        snapshot: &InventorySnapshot,
        parallelism: Parallelism,
    ) -> InventorySnapshot {
        let assets = self.score_assets(&snapshot.assets, parallelism);
        let services = self.score_services(&snapshot.services, &assets, parallelism);
        let risks = self.score_risks(&snapshot.risks, &services, parallelism);
        InventorySnapshot::new(assets, services, risks)
    }
}

/// Map one stage, on the rayon pool when the stage is large enough.
fn map_stage<T, U, F>(items: &[T], parallelism: Parallelism, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    if parallelism.is_parallel(items.len()) {
        items.par_iter().map(f).collect()
    } else {
        items.iter().map(f).collect()
    }
}
