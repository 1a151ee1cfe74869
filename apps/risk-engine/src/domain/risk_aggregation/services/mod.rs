//! Risk Aggregation Domain Services

mod asset_scoring;
mod drift_detection;
mod lookup;
mod pipeline;
mod risk_aggregation_service;
mod risk_rollup;
mod service_rollup;

pub use asset_scoring::score_asset;
pub use drift_detection::detect_drift;
pub use lookup::{IdIndex, Identified};
pub use pipeline::{
    compute_asset_risk_score, compute_risk_score_from_services, compute_service_risk_score,
    recalculate_all,
};
pub use risk_aggregation_service::RiskAggregationService;
pub use risk_rollup::roll_up_risk;
pub use service_rollup::roll_up_service;
