//! Asset risk scoring from CIA impact and criticality.

use rust_decimal::Decimal;

use crate::domain::inventory::Asset;
use crate::domain::risk_aggregation::value_objects::{
    AVG_CIA_WEIGHT_FACTOR, MAX_CIA_WEIGHT_FACTOR, ScoringTables,
};
use crate::domain::shared::RiskScore;

/// Score one asset.
///
/// `impact = max(c, i, a) * 0.6 + mean(c, i, a) * 0.4`, multiplied by the
/// criticality weight. An absent asset scores zero.
#[must_use]
pub fn score_asset(tables: &ScoringTables, asset: Option<&Asset>) -> RiskScore {
    let Some(asset) = asset else {
        return RiskScore::ZERO;
    };

    let confidentiality = tables.cia.weight(asset.confidentiality_impact.as_ref());
    let integrity = tables.cia.weight(asset.integrity_impact.as_ref());
    let availability = tables.cia.weight(asset.availability_impact.as_ref());

    let max_cia = confidentiality.max(integrity).max(availability);
    let avg_cia = (confidentiality + integrity + availability) / Decimal::from(3_u8);
    let impact_score = max_cia * MAX_CIA_WEIGHT_FACTOR + avg_cia * AVG_CIA_WEIGHT_FACTOR;

    let criticality = tables.criticality.weight(asset.criticality.as_ref());
    RiskScore::from_decimal(impact_score.saturating_mul(criticality))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::{CiaLevel, Criticality};
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn score(asset: &Asset) -> Decimal {
        score_asset(&ScoringTables::default(), Some(asset)).value()
    }

    #[test]
    fn all_high_critical_scores_twelve() {
        let asset = Asset::new("a1")
            .with_cia(CiaLevel::High, CiaLevel::High, CiaLevel::High)
            .with_criticality(Criticality::Critical);
        let result = score_asset(&ScoringTables::default(), Some(&asset));
        assert_eq!(result.to_string(), "12.00");
    }

    #[test]
    fn all_low_scores_one() {
        let asset = Asset::new("a1")
            .with_cia(CiaLevel::Low, CiaLevel::Low, CiaLevel::Low)
            .with_criticality(Criticality::Low);
        assert_eq!(score(&asset), dec!(1.00));
    }

    #[test]
    fn absent_asset_scores_zero() {
        assert!(score_asset(&ScoringTables::default(), None).is_zero());
    }

    #[test]
    fn unrated_asset_uses_default_weights() {
        assert_eq!(score(&Asset::new("bare")), dec!(1.00));
    }

    #[test]
    fn unrecognized_levels_use_default_weights() {
        let asset: Asset = serde_json::from_str(
            r#"{"id": "a1", "confidentialityImpact": "extreme", "criticality": "severe"}"#,
        )
        .unwrap();
        assert_eq!(score(&asset), dec!(1.00));
    }

    // max = 3, mean = 2, impact = 1.8 + 0.8 = 2.6
    #[test_case(CiaLevel::High, CiaLevel::Moderate, CiaLevel::Low, Criticality::Low, dec!(2.60); "mixed low")]
    #[test_case(CiaLevel::High, CiaLevel::Moderate, CiaLevel::Low, Criticality::Critical, dec!(10.40); "mixed critical")]
    // max = 2, mean = 5/3, impact = 1.2 + 0.666.. = 1.8666..
    #[test_case(CiaLevel::Moderate, CiaLevel::Moderate, CiaLevel::Low, Criticality::Low, dec!(1.87); "repeating decimal")]
    #[test_case(CiaLevel::Moderate, CiaLevel::Moderate, CiaLevel::Low, Criticality::High, dec!(5.60); "repeating decimal high")]
    // max = 3, mean = 7/3, impact = 1.8 + 0.9333.. = 2.7333..
    #[test_case(CiaLevel::High, CiaLevel::High, CiaLevel::Low, Criticality::Medium, dec!(5.47); "rounds up")]
    #[test_case(CiaLevel::High, CiaLevel::High, CiaLevel::High, Criticality::High, dec!(9.00); "all high")]
    fn weighted_score(
        c: CiaLevel,
        i: CiaLevel,
        a: CiaLevel,
        criticality: Criticality,
        expected: Decimal,
    ) {
        let asset = Asset::new("a")
            .with_cia(c, i, a)
            .with_criticality(criticality);
        assert_eq!(score(&asset), expected);
    }

    #[test]
    fn worst_dimension_dominates_average() {
        let one_high = Asset::new("a").with_cia(CiaLevel::High, CiaLevel::Low, CiaLevel::Low);
        let two_moderate =
            Asset::new("b").with_cia(CiaLevel::Moderate, CiaLevel::Moderate, CiaLevel::Low);
        assert!(score(&one_high) > score(&two_moderate));
    }

    #[test]
    fn uses_custom_tables() {
        let mut tables = ScoringTables::default();
        tables.criticality.critical = dec!(5);
        let asset = Asset::new("a")
            .with_cia(CiaLevel::Moderate, CiaLevel::Moderate, CiaLevel::Moderate)
            .with_criticality(Criticality::Critical);
        assert_eq!(score_asset(&tables, Some(&asset)).value(), dec!(10.00));
    }

    #[test]
    fn is_idempotent() {
        let asset = Asset::new("a")
            .with_cia(CiaLevel::High, CiaLevel::Low, CiaLevel::Moderate)
            .with_criticality(Criticality::Medium);
        assert_eq!(score(&asset), score(&asset));
    }

    #[test]
    fn mistyped_ratings_use_fallback_weights() {
        let json = r#"{
            "id": "a1",
            "confidentialityImpact": "High",
            "integrityImpact": 3,
            "availabilityImpact": "high",
            "criticality": true
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        // max 3 * 0.6 + mean 5/3 * 0.4, criticality fallback 1
        assert_eq!(score(&asset), dec!(2.47));
    }
}
