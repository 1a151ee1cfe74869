//! Recalculation report DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::risk_aggregation::ScoreDrift;
use crate::domain::risk_register::Risk;

/// Request for a recalculation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecalculateRequestDto {
    /// Compute and report without persisting.
    pub dry_run: bool,
}

/// One risk in the report's ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummaryDto {
    /// Risk id.
    pub id: String,
    /// Risk title, if any.
    pub title: Option<String>,
    /// Score as a two-place decimal string.
    pub risk_score: String,
}

/// DTO for a stale score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDriftDto {
    /// Entity kind (`asset`, `service` or `risk`).
    pub kind: String,
    /// Entity id.
    pub id: String,
    /// Previously stored score.
    pub stored: Option<String>,
    /// Freshly computed score.
    pub recalculated: String,
}

impl From<&ScoreDrift> for ScoreDriftDto {
    fn from(drift: &ScoreDrift) -> Self {
        Self {
            kind: drift.kind.to_string(),
            id: drift.id.clone(),
            stored: drift.stored.map(|s| s.to_string()),
            recalculated: drift.recalculated.to_string(),
        }
    }
}

/// Entity counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCountsDto {
    /// Assets scored.
    pub assets: usize,
    /// Services scored.
    pub services: usize,
    /// Risks scored.
    pub risks: usize,
}

/// Result of a recalculation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalculationReportDto {
    /// Run id.
    pub run_id: String,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Whether the result was left unsaved.
    pub dry_run: bool,
    /// Entities scored per pool.
    pub counts: EntityCountsDto,
    /// Entities whose score changed.
    pub changed_scores: usize,
    /// References that resolved to nothing.
    pub dangling_references: usize,
    /// Ids repeated within a pool.
    pub duplicate_ids: usize,
    /// Highest scoring risks, descending.
    pub top_risks: Vec<RiskSummaryDto>,
}

/// Result of a stale score check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftReportDto {
    /// Run id.
    pub run_id: String,
    /// When the check ran.
    pub checked_at: DateTime<Utc>,
    /// Stale entities, assets first.
    pub stale: Vec<ScoreDriftDto>,
}

impl DriftReportDto {
    /// Returns true if any stored score is stale.
    #[must_use]
    pub fn has_drift(&self) -> bool {
        !self.stale.is_empty()
    }
}

/// The `limit` highest scoring risks, ties broken by id.
#[must_use]
pub fn rank_risks(risks: &[Risk], limit: usize) -> Vec<RiskSummaryDto> {
    let mut ranked: Vec<&Risk> = risks.iter().collect();
    ranked.sort_by(|a, b| {
        b.risk_score
            .unwrap_or_default()
            .cmp(&a.risk_score.unwrap_or_default())
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked
        .into_iter()
        .take(limit)
        .map(|risk| RiskSummaryDto {
            id: risk.id.to_string(),
            title: risk.title.clone(),
            risk_score: risk.risk_score.unwrap_or_default().to_string(),
        })
        .collect()
}
