//! Weight and multiplier lookup tables.
//!
//! Every lookup has exactly one default arm: an absent or unrecognized
//! rating resolves to the table's `fallback` entry.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::inventory::{CiaLevel, Criticality, ServiceType};
use crate::domain::risk_aggregation::errors::AggregationError;
use crate::domain::shared::RiskScore;

/// Weight applied to the worst CIA dimension.
pub const MAX_CIA_WEIGHT_FACTOR: Decimal = dec!(0.6);

/// Weight applied to the mean of the three CIA dimensions.
pub const AVG_CIA_WEIGHT_FACTOR: Decimal = dec!(0.4);

/// Score returned when a service has nothing to roll up.
pub const FLOOR_SCORE: RiskScore = RiskScore::ONE;

/// Numeric weight per CIA impact level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CiaWeights {
    /// Weight for `low`.
    pub low: Decimal,
    /// Weight for `moderate`.
    pub moderate: Decimal,
    /// Weight for `high`.
    pub high: Decimal,
    /// Weight for an absent or unrecognized level.
    pub fallback: Decimal,
}

impl Default for CiaWeights {
    fn default() -> Self {
        Self {
            low: dec!(1),
            moderate: dec!(2),
            high: dec!(3),
            fallback: dec!(1),
        }
    }
}

impl CiaWeights {
    /// Weight for `level`.
    #[must_use]
    pub fn weight(&self, level: Option<&CiaLevel>) -> Decimal {
        match level {
            Some(CiaLevel::Low) => self.low,
            Some(CiaLevel::Moderate) => self.moderate,
            Some(CiaLevel::High) => self.high,
            Some(CiaLevel::Unrecognized(_)) | None => self.fallback,
        }
    }
}

/// Numeric weight per criticality tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriticalityWeights {
    /// Weight for `low`.
    pub low: Decimal,
    /// Weight for `medium`.
    pub medium: Decimal,
    /// Weight for `high`.
    pub high: Decimal,
    /// Weight for `critical`.
    pub critical: Decimal,
    /// Weight for an absent or unrecognized tier.
    pub fallback: Decimal,
}

impl Default for CriticalityWeights {
    fn default() -> Self {
        Self {
            low: dec!(1),
            medium: dec!(2),
            high: dec!(3),
            critical: dec!(4),
            fallback: dec!(1),
        }
    }
}

impl CriticalityWeights {
    /// Weight for `criticality`.
    #[must_use]
    pub fn weight(&self, criticality: Option<&Criticality>) -> Decimal {
        match criticality {
            Some(Criticality::Low) => self.low,
            Some(Criticality::Medium) => self.medium,
            Some(Criticality::High) => self.high,
            Some(Criticality::Critical) => self.critical,
            Some(Criticality::Unrecognized(_)) | None => self.fallback,
        }
    }
}

/// Rollup multiplier per service tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceTypeMultipliers {
    /// Multiplier for `business_critical`.
    pub business_critical: Decimal,
    /// Multiplier for `business_important`.
    pub business_important: Decimal,
    /// Multiplier for `business_support`.
    pub business_support: Decimal,
    /// Multiplier for `development`.
    pub development: Decimal,
    /// Multiplier for an absent or unrecognized tier.
    pub fallback: Decimal,
}

impl Default for ServiceTypeMultipliers {
    fn default() -> Self {
        Self {
            business_critical: dec!(1.5),
            business_important: dec!(1.2),
            business_support: dec!(1.0),
            development: dec!(0.8),
            fallback: dec!(1.0),
        }
    }
}

impl ServiceTypeMultipliers {
    /// Multiplier for `service_type`.
    #[must_use]
    pub fn multiplier(&self, service_type: Option<&ServiceType>) -> Decimal {
        match service_type {
            Some(ServiceType::BusinessCritical) => self.business_critical,
            Some(ServiceType::BusinessImportant) => self.business_important,
            Some(ServiceType::BusinessSupport) => self.business_support,
            Some(ServiceType::Development) => self.development,
            Some(ServiceType::Unrecognized(_)) | None => self.fallback,
        }
    }
}

/// One dependency-count band: applies from `min_dependencies` up to the next band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyBand {
    /// Inclusive lower bound on the number of declared dependencies.
    pub min_dependencies: usize,
    /// Multiplier applied within the band.
    pub multiplier: Decimal,
}

impl DependencyBand {
    /// Create a band.
    #[must_use]
    pub const fn new(min_dependencies: usize, multiplier: Decimal) -> Self {
        Self {
            min_dependencies,
            multiplier,
        }
    }
}

fn default_dependency_bands() -> Vec<DependencyBand> {
    vec![
        DependencyBand::new(0, dec!(1.0)),
        DependencyBand::new(1, dec!(1.1)),
        DependencyBand::new(3, dec!(1.25)),
        DependencyBand::new(6, dec!(1.4)),
    ]
}

/// Complete set of lookup tables used by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringTables {
    /// CIA impact weights.
    #[serde(default)]
    pub cia: CiaWeights,
    /// Criticality weights.
    #[serde(default)]
    pub criticality: CriticalityWeights,
    /// Service tier multipliers.
    #[serde(default)]
    pub service_type: ServiceTypeMultipliers,
    /// Dependency-count bands, ascending by `min_dependencies`.
    #[serde(default = "default_dependency_bands")]
    pub dependency_bands: Vec<DependencyBand>,
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self {
            cia: CiaWeights::default(),
            criticality: CriticalityWeights::default(),
            service_type: ServiceTypeMultipliers::default(),
            dependency_bands: default_dependency_bands(),
        }
    }
}

impl ScoringTables {
    /// Multiplier for a service declaring `count` direct dependencies.
    ///
    /// Uses the raw count only; dependencies are not walked transitively.
    #[must_use]
    pub fn dependency_multiplier(&self, count: usize) -> Decimal {
        self.dependency_bands
            .iter()
            .take_while(|band| band.min_dependencies <= count)
            .last()
            .map_or(Decimal::ONE, |band| band.multiplier)
    }

    /// Check every weight and multiplier is positive and the bands are well formed.
    ///
    /// # Errors
    ///
    /// Returns `AggregationError::InvalidTables` naming the first bad entry.
    pub fn validate(&self) -> Result<(), AggregationError> {
        let entries = [
            ("cia.low", self.cia.low),
            ("cia.moderate", self.cia.moderate),
            ("cia.high", self.cia.high),
            ("cia.fallback", self.cia.fallback),
            ("criticality.low", self.criticality.low),
            ("criticality.medium", self.criticality.medium),
            ("criticality.high", self.criticality.high),
            ("criticality.critical", self.criticality.critical),
            ("criticality.fallback", self.criticality.fallback),
            ("service_type.business_critical", self.service_type.business_critical),
            ("service_type.business_important", self.service_type.business_important),
            ("service_type.business_support", self.service_type.business_support),
            ("service_type.development", self.service_type.development),
            ("service_type.fallback", self.service_type.fallback),
        ];
        for (field, value) in entries {
            if value <= Decimal::ZERO {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }

        let Some(first) = self.dependency_bands.first() else {
            return Err(invalid("dependency_bands", "at least one band is required"));
        };
        if first.min_dependencies != 0 {
            return Err(invalid(
                "dependency_bands[0].min_dependencies",
                format!("first band must start at 0, got {}", first.min_dependencies),
            ));
        }
        for (index, band) in self.dependency_bands.iter().enumerate() {
            if band.multiplier <= Decimal::ZERO {
                return Err(invalid(
                    &format!("dependency_bands[{index}].multiplier"),
                    format!("must be positive, got {}", band.multiplier),
                ));
            }
        }
        for (index, pair) in self.dependency_bands.windows(2).enumerate() {
            if pair[1].min_dependencies <= pair[0].min_dependencies {
                return Err(invalid(
                    &format!("dependency_bands[{}].min_dependencies", index + 1),
                    "bands must be strictly ascending",
                ));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> AggregationError {
    AggregationError::InvalidTables {
        field: field.to_string(),
        message: message.into(),
    }
}
