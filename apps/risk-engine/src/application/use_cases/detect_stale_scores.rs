//! Detect Stale Scores Use Case

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::application::dto::{DriftReportDto, ScoreDriftDto};
use crate::application::ports::InventoryRepositoryPort;
use crate::domain::risk_aggregation::{Parallelism, RiskAggregationService, detect_drift};
use crate::domain::shared::RunId;
use crate::error::EngineError;

use super::recalculate_all::log_diagnostics;

/// Use case for finding stored scores that no longer match their inputs.
///
/// Runs the full pipeline and never persists.
pub struct DetectStaleScoresUseCase<R>
where
    R: InventoryRepositoryPort,
{
    repo: Arc<R>,
    engine: RiskAggregationService,
    parallelism: Parallelism,
}

impl<R> DetectStaleScoresUseCase<R>
where
    R: InventoryRepositoryPort,
{
    /// Create a new DetectStaleScoresUseCase.
    pub fn new(repo: Arc<R>, engine: RiskAggregationService) -> Self {
        Self {
            repo,
            engine,
            parallelism: Parallelism::default(),
        }
    }

    /// Set the stage parallelism threshold.
    #[must_use]
    pub const fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Execute the use case.
    pub async fn execute(&self) -> Result<DriftReportDto, EngineError> {
        let run_id = RunId::generate();
        let checked_at = Utc::now();

        let snapshot = self.repo.load_snapshot().await?;
        log_diagnostics(&run_id, &snapshot);

        let recalculated = self.engine.recalculate(&snapshot, self.parallelism);
        let drift = detect_drift(&snapshot, &recalculated);

        for item in &drift {
            warn!(
                run_id = %run_id,
                kind = %item.kind,
                id = %item.id,
                stored = ?item.stored.map(|s| s.to_string()),
                recalculated = %item.recalculated,
                "Stale risk score"
            );
        }
        info!(run_id = %run_id, stale = drift.len(), "Stale score check complete");

        Ok(DriftReportDto {
            run_id: run_id.into_inner(),
            checked_at,
            stale: drift.iter().map(ScoreDriftDto::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::InMemoryInventoryRepository;
    use crate::domain::inventory::{Asset, Service};
    use crate::domain::risk_aggregation::{InventorySnapshot, recalculate_all};
    use crate::domain::risk_register::Risk;
    use crate::domain::shared::RiskScore;
    use rust_decimal_macros::dec;

    fn inventory() -> InventorySnapshot {
        InventorySnapshot::new(
            vec![Asset::new("a1")],
            vec![Service::new("s1").with_dependent_assets(["a1"])],
            vec![Risk::new("r1").with_affected_services(["s1"])],
        )
    }

    #[tokio::test]
    async fn fresh_snapshot_has_no_drift() {
        let repo = Arc::new(InMemoryInventoryRepository::with_snapshot(recalculate_all(
            &inventory(),
        )));
        let report = DetectStaleScoresUseCase::new(repo, RiskAggregationService::default())
            .execute()
            .await
            .unwrap();
        assert!(!report.has_drift());
    }

    #[tokio::test]
    async fn reports_stale_scores_without_saving() {
        let mut stored = recalculate_all(&inventory());
        stored.services[0].risk_score = Some(RiskScore::from_decimal(dec!(7)));
        let repo = Arc::new(InMemoryInventoryRepository::with_snapshot(stored.clone()));

        let engine = RiskAggregationService::default();
        let report = DetectStaleScoresUseCase::new(Arc::clone(&repo), engine)
            .execute()
            .await
            .unwrap();

        assert_eq!(report.stale.len(), 1);
        assert_eq!(report.stale[0].id, "s1");
        assert_eq!(report.stale[0].stored.as_deref(), Some("7.00"));
        assert_eq!(report.stale[0].recalculated, "1.00");
        assert_eq!(repo.current(), stored);
    }
}
