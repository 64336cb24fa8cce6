use crate::config;
use crate::models::enums::{DoseStatus, RiskTier};
use crate::models::DoseEvent;

use super::types::AdherenceMetric;

/// Aggregate a dose-event history into per-status counters, a percentage
/// taken, and a coarse risk tier.
///
/// `total` is the raw event count. Events whose status the engine does not
/// recognize stay out of the four counters but still widen the denominator,
/// so they depress the percentage. An empty history reads as perfect
/// adherence. Order-independent, unlike the pattern and risk analyzers.
pub fn compute_adherence(events: &[DoseEvent]) -> AdherenceMetric {
    let total = events.len();
    let taken = count_status(events, &DoseStatus::Taken);
    let missed = count_status(events, &DoseStatus::Missed);
    let skipped = count_status(events, &DoseStatus::Skipped);
    let delayed = count_status(events, &DoseStatus::Delayed);

    let pct = if total == 0 {
        100
    } else {
        ((taken as f64 / total as f64) * 100.0).round() as u8
    };

    let risk = if pct < config::HIGH_RISK_BELOW_PCT {
        RiskTier::High
    } else if pct < config::MEDIUM_RISK_BELOW_PCT {
        RiskTier::Medium
    } else {
        RiskTier::Low
    };

    AdherenceMetric {
        pct,
        risk,
        taken,
        missed,
        skipped,
        delayed,
        total,
    }
}

fn count_status(events: &[DoseEvent], status: &DoseStatus) -> usize {
    events.iter().filter(|e| e.status == *status).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(status: &str) -> DoseEvent {
        DoseEvent {
            status: DoseStatus::from(status),
            scheduled_time: None,
            actual_time: None,
            medicine: None,
        }
    }

    fn events(statuses: &[&str]) -> Vec<DoseEvent> {
        statuses.iter().map(|s| event(s)).collect()
    }

    /// Empty history is treated as perfect adherence.
    #[test]
    fn empty_history_is_perfect() {
        let metric = compute_adherence(&[]);
        assert_eq!(metric.pct, 100);
        assert_eq!(metric.risk, RiskTier::Low);
        assert_eq!(metric.total, 0);
        assert_eq!(metric.taken + metric.missed + metric.skipped + metric.delayed, 0);
    }

    /// Counters cover the four known statuses and total is the raw length.
    #[test]
    fn counts_each_known_status() {
        let metric = compute_adherence(&events(&[
            "Taken", "Missed", "Skipped", "Delayed", "Taken",
        ]));
        assert_eq!(metric.taken, 2);
        assert_eq!(metric.missed, 1);
        assert_eq!(metric.skipped, 1);
        assert_eq!(metric.delayed, 1);
        assert_eq!(metric.total, 5);
        assert_eq!(metric.pct, 40);
    }

    /// Unknown statuses widen the denominator without entering any counter.
    #[test]
    fn unknown_status_counts_toward_total_only() {
        let metric = compute_adherence(&events(&["Taken", "Paused"]));
        assert_eq!(metric.total, 2);
        assert_eq!(metric.taken, 1);
        assert_eq!(metric.taken + metric.missed + metric.skipped + metric.delayed, 1);
        assert_eq!(metric.pct, 50);
    }

    /// pct 60 is Medium and pct 80 is Low; the boundaries are inclusive.
    #[test]
    fn risk_tier_boundaries() {
        // 3/5 = 60
        let at_sixty = compute_adherence(&events(&["Taken", "Taken", "Taken", "Missed", "Missed"]));
        assert_eq!(at_sixty.pct, 60);
        assert_eq!(at_sixty.risk, RiskTier::Medium);

        // 4/5 = 80
        let at_eighty = compute_adherence(&events(&["Taken", "Taken", "Taken", "Taken", "Missed"]));
        assert_eq!(at_eighty.pct, 80);
        assert_eq!(at_eighty.risk, RiskTier::Low);

        // 10/17 rounds to 59
        let mut statuses = vec!["Taken"; 10];
        statuses.extend(vec!["Missed"; 7]);
        let below_sixty = compute_adherence(&events(&statuses));
        assert_eq!(below_sixty.pct, 59);
        assert_eq!(below_sixty.risk, RiskTier::High);

        // 11/14 rounds to 79
        let mut statuses = vec!["Taken"; 11];
        statuses.extend(vec!["Missed"; 3]);
        let below_eighty = compute_adherence(&events(&statuses));
        assert_eq!(below_eighty.pct, 79);
        assert_eq!(below_eighty.risk, RiskTier::Medium);
    }

    /// Percentage stays within 0-100 for any mix of statuses.
    #[test]
    fn pct_is_bounded() {
        let all_missed = compute_adherence(&events(&["Missed"; 20]));
        assert_eq!(all_missed.pct, 0);

        let all_taken = compute_adherence(&events(&["Taken"; 20]));
        assert_eq!(all_taken.pct, 100);
    }

    /// Permuting the history does not change the metric.
    #[test]
    fn order_independent() {
        let forward = compute_adherence(&events(&["Taken", "Missed", "Taken", "Skipped"]));
        let reversed = compute_adherence(&events(&["Skipped", "Taken", "Missed", "Taken"]));
        assert_eq!(forward, reversed);
    }

    /// A three-miss run bracketed by takes: 4/7 rounds to 57, High risk.
    #[test]
    fn mid_week_miss_run_scenario() {
        let metric = compute_adherence(&events(&[
            "Taken", "Taken", "Missed", "Missed", "Missed", "Taken", "Taken",
        ]));
        assert_eq!(metric.taken, 4);
        assert_eq!(metric.missed, 3);
        assert_eq!(metric.total, 7);
        assert_eq!(metric.pct, 57);
        assert_eq!(metric.risk, RiskTier::High);
    }
}
