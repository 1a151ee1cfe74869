//! Risk Aggregation Bounded Context
//!
//! Derives risk scores bottom-up: assets from their ratings, services from
//! their dependent assets, risks from their affected services.
//!
//! # Key Concepts
//!
//! - **Scoring tables**: Weights and multipliers, each lookup with one default arm
//! - **Floor score**: 1.00, returned when a service has nothing to roll up
//! - **Pipeline**: Assets, then services, then risks; later stages read earlier scores
//! - **Drift**: A stored score that no longer matches a fresh recalculation

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::AggregationError;
pub use services::{
    RiskAggregationService, compute_asset_risk_score, compute_risk_score_from_services,
    compute_service_risk_score, detect_drift, recalculate_all,
};
pub use value_objects::{
    AVG_CIA_WEIGHT_FACTOR, CiaWeights, CriticalityWeights, DanglingReference, DependencyBand,
    DuplicateId, EntityKind, FLOOR_SCORE, InventorySnapshot, MAX_CIA_WEIGHT_FACTOR, Parallelism,
    ScoreDrift, ScoringTables, ServiceTypeMultipliers,
};
