//! Recalculate All Use Case

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::application::dto::{
    EntityCountsDto, RecalculateRequestDto, RecalculationReportDto, rank_risks,
};
use crate::application::ports::InventoryRepositoryPort;
use crate::domain::risk_aggregation::{
    InventorySnapshot, Parallelism, RiskAggregationService, detect_drift,
};
use crate::domain::shared::RunId;
use crate::error::EngineError;

/// Default number of risks listed in a report.
pub const DEFAULT_TOP_RISKS: usize = 10;

/// Use case for rescoring a stored inventory in pipeline order.
pub struct RecalculateAllUseCase<R>
where
    R: InventoryRepositoryPort,
{
    repo: Arc<R>,
    engine: RiskAggregationService,
    parallelism: Parallelism,
    top_risks: usize,
}

impl<R> RecalculateAllUseCase<R>
where
    R: InventoryRepositoryPort,
{
    /// Create a new RecalculateAllUseCase.
    pub fn new(repo: Arc<R>, engine: RiskAggregationService) -> Self {
        Self {
            repo,
            engine,
            parallelism: Parallelism::default(),
            top_risks: DEFAULT_TOP_RISKS,
        }
    }

    /// Set the stage parallelism threshold.
    #[must_use]
    pub const fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Set how many risks the report lists.
    #[must_use]
    pub const fn with_top_risks(mut self, top_risks: usize) -> Self {
        self.top_risks = top_risks;
        self
    }

    /// Execute the use case.
    pub async fn execute(
        &self,
        request: RecalculateRequestDto,
    ) -> Result<RecalculationReportDto, EngineError> {
        let run_id = RunId::generate();
        let started_at = Utc::now();

        // 1. Load
        let snapshot = self.repo.load_snapshot().await?;
        debug!(
            run_id = %run_id,
            assets = snapshot.assets.len(),
            services = snapshot.services.len(),
            risks = snapshot.risks.len(),
            "Loaded inventory snapshot"
        );

        // 2. Diagnose
        let (dangling, duplicates) = log_diagnostics(&run_id, &snapshot);

        // 3. Recalculate
        let recalculated = self.engine.recalculate(&snapshot, self.parallelism);
        let changed = detect_drift(&snapshot, &recalculated).len();

        // 4. Persist
        if request.dry_run {
            info!(run_id = %run_id, "Dry run, snapshot not saved");
        } else {
            self.repo.save_snapshot(&recalculated).await?;
        }

        info!(
            run_id = %run_id,
            entities = recalculated.len(),
            changed,
            dry_run = request.dry_run,
            "Recalculation complete"
        );

        Ok(RecalculationReportDto {
            run_id: run_id.into_inner(),
            started_at,
            dry_run: request.dry_run,
            counts: EntityCountsDto {
                assets: recalculated.assets.len(),
                services: recalculated.services.len(),
                risks: recalculated.risks.len(),
            },
            changed_scores: changed,
            dangling_references: dangling,
            duplicate_ids: duplicates,
            top_risks: rank_risks(&recalculated.risks, self.top_risks),
        })
    }
}

/// Log unresolved references and duplicate ids. Returns their counts.
pub(crate) fn log_diagnostics(run_id: &RunId, snapshot: &InventorySnapshot) -> (usize, usize) {
    let dangling = snapshot.dangling_references();
    for reference in &dangling {
        warn!(
            run_id = %run_id,
            from_kind = %reference.from_kind,
            from_id = %reference.from_id,
            to_kind = %reference.to_kind,
            to_id = %reference.to_id,
            "Unresolved reference skipped"
        );
    }

    let duplicates = snapshot.duplicate_ids();
    for duplicate in &duplicates {
        warn!(
            run_id = %run_id,
            kind = %duplicate.kind,
            id = %duplicate.id,
            occurrences = duplicate.occurrences,
            "Duplicate id, first occurrence used"
        );
    }

    (dangling.len(), duplicates.len())
}
