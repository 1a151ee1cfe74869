//! Service-to-risk rollup.

use rust_decimal::Decimal;

use crate::domain::risk_register::Risk;
use crate::domain::shared::{RiskScore, ServiceId};

/// Roll affected service scores up into a risk score.
///
/// `resolve` maps each affected service id to its current score; unresolved
/// ids and unscored services are skipped. With nothing resolved the result
/// falls back to `probability * impact`, each defaulting to 1 when unrated.
pub fn roll_up_risk<F>(risk: Option<&Risk>, resolve: F) -> RiskScore
where
    F: Fn(&ServiceId) -> Option<RiskScore>,
{
    let Some(risk) = risk else {
        return RiskScore::ONE;
    };

    let mut total = Decimal::ZERO;
    let mut resolved: u64 = 0;
    for score in risk.affected_services.iter().filter_map(&resolve) {
        total = total.saturating_add(score.value());
        resolved += 1;
    }

    let probability = risk.probability_or_default();
    if resolved == 0 {
        return RiskScore::from_decimal(probability.saturating_mul(risk.impact_or_default()));
    }

    let avg_service_risk = total / Decimal::from(resolved);
    RiskScore::from_decimal(probability.saturating_mul(avg_service_risk))
}
