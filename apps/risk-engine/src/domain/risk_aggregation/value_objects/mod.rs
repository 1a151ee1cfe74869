//! Risk Aggregation Value Objects

mod entity_kind;
mod parallelism;
mod score_drift;
mod scoring_tables;
mod snapshot;

pub use entity_kind::EntityKind;
pub use parallelism::Parallelism;
pub use score_drift::ScoreDrift;
pub use scoring_tables::{
    AVG_CIA_WEIGHT_FACTOR, CiaWeights, CriticalityWeights, DependencyBand, FLOOR_SCORE,
    MAX_CIA_WEIGHT_FACTOR, ScoringTables, ServiceTypeMultipliers,
};
pub use snapshot::{DanglingReference, DuplicateId, InventorySnapshot};
