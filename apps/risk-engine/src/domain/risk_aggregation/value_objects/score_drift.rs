//! Stored-versus-recalculated score mismatch.

use serde::{Deserialize, Serialize};

use super::EntityKind;
use crate::domain::shared::RiskScore;

/// An entity whose persisted `riskScore` no longer matches its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDrift {
    /// Entity pool.
    pub kind: EntityKind,
    /// Entity id.
    pub id: String,
    /// Score carried by the input, if any.
    pub stored: Option<RiskScore>,
    /// Score produced by the pipeline.
    pub recalculated: RiskScore,
}

impl ScoreDrift {
    /// Returns the drift when `stored` differs from `recalculated`.
    ///
    /// A missing stored score counts as stale.
    #[must_use]
    pub fn compare(
        kind: EntityKind,
        id: &str,
        stored: Option<RiskScore>,
        recalculated: RiskScore,
    ) -> Option<Self> {
        if stored == Some(recalculated) {
            return None;
        }
        Some(Self {
            kind,
            id: id.to_string(),
            stored,
            recalculated,
        })
    }

    /// Signed difference, treating a missing stored score as zero.
    #[must_use]
    pub fn delta(&self) -> rust_decimal::Decimal {
        self.recalculated.value() - self.stored.unwrap_or_default().value()
    }
}
