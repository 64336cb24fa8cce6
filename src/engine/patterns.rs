use chrono::{Datelike, Timelike, Weekday};

use crate::config;
use crate::models::enums::{DoseStatus, RecommendationKind, RiskFactorKind, Severity};
use crate::models::DoseEvent;

use super::messages::MessageTemplates;
use super::tail;
use super::types::{PatternAnalysis, Recommendation, RiskFactor};

/// Derive behavioral signals from a dose-event history: timing consistency,
/// scheduling accuracy, structural risk factors over the most recent events,
/// and the recommendations that follow from them.
///
/// Empty input yields an all-zero analysis with no factors and no
/// recommendations. Input order matters: the risk-factor scan looks at the
/// last `PATTERN_WINDOW_EVENTS` entries as supplied.
pub fn analyze_behavioral_patterns(events: &[DoseEvent]) -> PatternAnalysis {
    if events.is_empty() {
        return PatternAnalysis {
            consistency: 0.0,
            timing_accuracy: 0.0,
            risk_factors: Vec::new(),
            recommendations: Vec::new(),
        };
    }

    let consistency = (100.0 - time_of_day_stddev(events)).max(0.0);
    let timing_accuracy = timing_accuracy(events);
    let risk_factors = identify_risk_factors(events);
    let recommendations = generate_recommendations(consistency, timing_accuracy, &risk_factors);

    PatternAnalysis {
        consistency,
        timing_accuracy,
        risk_factors,
        recommendations,
    }
}

/// Population standard deviation, in minutes, of the clock times at which
/// doses were taken. Fewer than two qualifying events means no spread to
/// measure, so the deviation is 0.
fn time_of_day_stddev(events: &[DoseEvent]) -> f64 {
    let minutes: Vec<f64> = events
        .iter()
        .filter(|e| e.status == DoseStatus::Taken)
        .filter_map(|e| e.actual_time)
        .map(|t| f64::from(t.hour() * 60 + t.minute()))
        .collect();

    if minutes.len() < 2 {
        return 0.0;
    }

    let mean = minutes.iter().sum::<f64>() / minutes.len() as f64;
    let variance =
        minutes.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / minutes.len() as f64;
    variance.sqrt()
}

/// 0-100 score from the mean absolute delay between scheduled and actual
/// time across taken doses; an average delay of `DELAY_FLOOR_MINUTES`
/// floors the score at 0. No qualifying events scores 100.
fn timing_accuracy(events: &[DoseEvent]) -> f64 {
    let delays: Vec<f64> = events
        .iter()
        .filter(|e| e.status == DoseStatus::Taken)
        .filter_map(|e| match (e.scheduled_time, e.actual_time) {
            (Some(scheduled), Some(actual)) => {
                Some((actual - scheduled).num_milliseconds().abs() as f64 / 60_000.0)
            }
            _ => None,
        })
        .collect();

    if delays.is_empty() {
        return 100.0;
    }

    let avg_delay = delays.iter().sum::<f64>() / delays.len() as f64;
    (100.0 - (avg_delay / config::DELAY_FLOOR_MINUTES) * 100.0).max(0.0)
}

/// Scan the last `PATTERN_WINDOW_EVENTS` entries for structural risk:
/// a trailing run of missed doses, frequent delays, and weekend-specific
/// misses, emitted in that order.
fn identify_risk_factors(events: &[DoseEvent]) -> Vec<RiskFactor> {
    let mut factors = Vec::new();
    let recent = tail(events, config::PATTERN_WINDOW_EVENTS);

    let consecutive_missed = recent
        .iter()
        .rev()
        .take_while(|e| e.status == DoseStatus::Missed)
        .count();
    if consecutive_missed >= config::CONSECUTIVE_MISSED_THRESHOLD {
        factors.push(RiskFactor {
            kind: RiskFactorKind::ConsecutiveMissed,
            severity: Severity::High,
            message: MessageTemplates::consecutive_missed(consecutive_missed),
            medicine: None,
            action: None,
        });
    }

    let delayed = recent
        .iter()
        .filter(|e| e.status == DoseStatus::Delayed)
        .count();
    if delayed >= config::FREQUENT_DELAY_THRESHOLD {
        factors.push(RiskFactor {
            kind: RiskFactorKind::FrequentDelays,
            severity: Severity::Medium,
            message: MessageTemplates::frequent_delays(),
            medicine: None,
            action: None,
        });
    }

    let weekend_missed = recent
        .iter()
        .filter(|e| is_weekend_scheduled(e))
        .filter(|e| e.status == DoseStatus::Missed)
        .count();
    if weekend_missed >= config::WEEKEND_MISSED_THRESHOLD {
        factors.push(RiskFactor {
            kind: RiskFactorKind::WeekendPattern,
            severity: Severity::Medium,
            message: MessageTemplates::weekend_pattern(),
            medicine: None,
            action: None,
        });
    }

    factors
}

fn is_weekend_scheduled(event: &DoseEvent) -> bool {
    event
        .scheduled_time
        .map_or(false, |t| matches!(t.weekday(), Weekday::Sat | Weekday::Sun))
}

/// Recommendations follow from the computed fields alone, in a fixed order;
/// several can co-occur. Only when nothing else triggers does the single
/// congratulatory entry appear.
fn generate_recommendations(
    consistency: f64,
    timing_accuracy: f64,
    risk_factors: &[RiskFactor],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if consistency < config::LOW_CONSISTENCY_BELOW {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Consistency,
            message: MessageTemplates::recommend_consistency(),
        });
    }

    if timing_accuracy < config::LOW_TIMING_ACCURACY_BELOW {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Timing,
            message: MessageTemplates::recommend_timing(),
        });
    }

    if risk_factors.iter().any(|rf| rf.severity == Severity::High) {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Urgent,
            message: MessageTemplates::recommend_urgent(),
        });
    }

    if risk_factors
        .iter()
        .any(|rf| rf.kind == RiskFactorKind::WeekendPattern)
    {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Weekend,
            message: MessageTemplates::recommend_weekend(),
        });
    }

    if recommendations.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Positive,
            message: MessageTemplates::recommend_positive(),
        });
    }

    recommendations
}
