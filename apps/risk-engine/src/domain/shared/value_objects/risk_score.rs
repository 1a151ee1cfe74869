//! Risk score value object.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Number of decimal places every derived score carries.
pub const SCORE_DECIMAL_PLACES: u32 = 2;

const HALF_UP: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// A derived risk score.
///
/// Always non-negative and rounded half-up (midpoint away from zero) to two
/// decimal places. The scale is fixed at two, so `12` is held as `12.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct RiskScore(Decimal);

impl RiskScore {
    /// Zero score.
    pub const ZERO: Self = Self(Decimal::from_parts(0, 0, 0, false, SCORE_DECIMAL_PLACES));

    /// Score of exactly one.
    pub const ONE: Self = Self(Decimal::from_parts(100, 0, 0, false, SCORE_DECIMAL_PLACES));

    /// Build a score from an unrounded value.
    ///
    /// Negative values clamp to zero.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        if value < Decimal::ZERO {
            return Self::ZERO;
        }
        let mut rounded = value.round_dp_with_strategy(SCORE_DECIMAL_PLACES, HALF_UP);
        rounded.rescale(SCORE_DECIMAL_PLACES);
        Self(rounded)
    }

    /// Build a score, rejecting negative input instead of clamping it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` when `value` is negative.
    pub fn try_new(value: Decimal) -> Result<Self, DomainError> {
        if value < Decimal::ZERO {
            return Err(DomainError::InvalidValue {
                field: "risk_score".to_string(),
                message: format!("must not be negative, got {value}"),
            });
        }
        Ok(Self::from_decimal(value))
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the score is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for RiskScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Decimal> for RiskScore {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<RiskScore> for Decimal {
    fn from(score: RiskScore) -> Self {
        score.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_to_two_places() {
        let score = RiskScore::from_decimal(dec!(7.333333));
        assert_eq!(score.value(), dec!(7.33));
    }

    #[test]
    fn rounds_midpoint_up() {
        assert_eq!(RiskScore::from_decimal(dec!(2.345)).value(), dec!(2.35));
        assert_eq!(RiskScore::from_decimal(dec!(2.355)).value(), dec!(2.36));
        assert_eq!(RiskScore::from_decimal(dec!(0.005)).value(), dec!(0.01));
    }

    #[test]
    fn does_not_truncate() {
        assert_eq!(RiskScore::from_decimal(dec!(7.339)).value(), dec!(7.34));
    }

    #[test]
    fn keeps_fixed_scale() {
        let score = RiskScore::from_decimal(dec!(12));
        assert_eq!(score.value().scale(), 2);
        assert_eq!(score.to_string(), "12.00");
    }

    #[test]
    fn negative_clamps_to_zero() {
        let score = RiskScore::from_decimal(dec!(-3.5));
        assert!(score.is_zero());
        assert_eq!(score, RiskScore::ZERO);
    }

    #[test]
    fn try_new_rejects_negative() {
        let err = RiskScore::try_new(dec!(-0.01)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { .. }));
        assert_eq!(RiskScore::try_new(dec!(1.005)).unwrap().value(), dec!(1.01));
    }

    #[test]
    fn one_constant_has_fixed_scale() {
        assert_eq!(RiskScore::ONE.value(), dec!(1));
        assert_eq!(RiskScore::ONE.to_string(), "1.00");
    }

    #[test]
    fn zero_display() {
        assert_eq!(RiskScore::ZERO.to_string(), "0.00");
        assert_eq!(RiskScore::default(), RiskScore::ZERO);
    }

    #[test]
    fn ordering_follows_value() {
        let low = RiskScore::from_decimal(dec!(1.5));
        let high = RiskScore::from_decimal(dec!(12));
        assert!(low < high);
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let from_number: RiskScore = serde_json::from_str("9").unwrap();
        let from_string: RiskScore = serde_json::from_str("\"9.004\"").unwrap();
        assert_eq!(from_number.value(), dec!(9));
        assert_eq!(from_string.value(), dec!(9.00));
    }

    #[test]
    fn serializes_with_two_places() {
        let json = serde_json::to_string(&RiskScore::from_decimal(dec!(18))).unwrap();
        assert_eq!(json, "\"18.00\"");
    }
}
