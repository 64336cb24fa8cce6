use crate::config;
use crate::models::enums::{InsightLevel, RiskTier};
use crate::models::DoseEvent;

use super::adherence::compute_adherence;
use super::messages::MessageTemplates;
use super::patterns::analyze_behavioral_patterns;
use super::types::Insight;

/// One-line adherence summary for dashboard surfaces.
///
/// Levels are checked in a fixed precedence: overall risk first, then timing
/// consistency, then the perfect-adherence case; anything left is plain good
/// adherence. Note an empty history lands on `InconsistentTiming` because
/// the pattern analysis of an empty history reports zero consistency.
pub fn quick_insight(events: &[DoseEvent]) -> Insight {
    let adherence = compute_adherence(events);
    let patterns = analyze_behavioral_patterns(events);

    let level = if adherence.risk == RiskTier::High {
        InsightLevel::HighRisk
    } else if adherence.risk == RiskTier::Medium {
        InsightLevel::ModerateRisk
    } else if patterns.consistency < config::LOW_CONSISTENCY_BELOW {
        InsightLevel::InconsistentTiming
    } else if adherence.pct == 100 {
        InsightLevel::Excellent
    } else {
        InsightLevel::Good
    };

    let message = match level {
        InsightLevel::HighRisk => MessageTemplates::insight_high_risk(),
        InsightLevel::ModerateRisk => MessageTemplates::insight_moderate_risk(),
        InsightLevel::InconsistentTiming => MessageTemplates::insight_inconsistent_timing(),
        InsightLevel::Excellent => MessageTemplates::insight_excellent(),
        InsightLevel::Good => MessageTemplates::insight_good(),
    };

    Insight { level, message }
}
