// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! GRC Risk Engine - Rust Core Library
//!
//! Deterministic risk aggregation for asset and service inventories and the
//! risk register built on them.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Records, value objects and pure scoring services
//!   - `inventory`: Assets, services, CIA and criticality ratings
//!   - `risk_register`: Risk entries rated by probability and impact
//!   - `risk_aggregation`: Scoring tables, rollups, the recalculation pipeline
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `InventoryRepositoryPort`
//!   - `use_cases`: `RecalculateAll`, `DetectStaleScores`
//!   - `dto`: Reports returned to the CLI
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: JSON snapshot files
//!
//! # Scoring
//!
//! Scores flow bottom-up in a fixed order: assets from their ratings,
//! services from their dependent assets, risks from their affected services.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Command-line interface definition.
pub mod cli;

/// Configuration loading and validation.
pub mod config;

/// Engine-level errors and exit codes.
pub mod error;

/// Structured logging.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::inventory::{Asset, AssetType, CiaLevel, Criticality, Service, ServiceType};
pub use domain::risk_aggregation::{
    AVG_CIA_WEIGHT_FACTOR, AggregationError, CiaWeights, CriticalityWeights, DependencyBand,
    FLOOR_SCORE, InventorySnapshot, MAX_CIA_WEIGHT_FACTOR, Parallelism, RiskAggregationService,
    ScoreDrift, ScoringTables, ServiceTypeMultipliers, compute_asset_risk_score,
    compute_risk_score_from_services, compute_service_risk_score, detect_drift, recalculate_all,
};
pub use domain::risk_register::Risk;
pub use domain::shared::{AssetId, DomainError, RiskId, RiskScore, RunId, ServiceId};

// Application re-exports
pub use application::dto::{DriftReportDto, RecalculateRequestDto, RecalculationReportDto};
pub use application::ports::{InMemoryInventoryRepository, InventoryRepositoryPort, RepositoryError};
pub use application::use_cases::{DetectStaleScoresUseCase, RecalculateAllUseCase};

// Infrastructure re-exports
pub use infrastructure::persistence::JsonFileInventoryRepository;

// Cross-cutting re-exports
pub use config::{Config, ConfigError, load_config};
pub use error::{EngineError, ErrorCode};
