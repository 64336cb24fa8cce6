use crate::config;
use crate::models::{DoseEvent, Medicine};

use super::adherence::compute_adherence;
use super::patterns::analyze_behavioral_patterns;
use super::reference::DrugClassifications;
use super::risks::predict_health_risks;
use super::tail;
use crate::models::enums::TrendDirection;
use super::types::{
    AdherenceReport, AdherenceTrend, EngineError, MedicineBreakdown,
};

/// Orchestrates the calculator, pattern analyzer, and risk predictor over a
/// bounded window of the event history. Holds the loaded classification
/// tables so callers load them once and reuse the engine across invocations.
pub struct AdherenceEngine {
    classifications: DrugClassifications,
}

impl AdherenceEngine {
    pub fn new(classifications: DrugClassifications) -> Self {
        Self { classifications }
    }

    /// Build a report over the last `period_days` entries of `events`.
    pub fn report(
        &self,
        events: &[DoseEvent],
        medicines: &[Medicine],
        period_days: usize,
    ) -> Result<AdherenceReport, EngineError> {
        generate_adherence_report(events, medicines, &self.classifications, period_days)
    }

    /// Build a report over the default 30-day window.
    pub fn report_default(
        &self,
        events: &[DoseEvent],
        medicines: &[Medicine],
    ) -> Result<AdherenceReport, EngineError> {
        self.report(events, medicines, config::DEFAULT_REPORT_PERIOD_DAYS)
    }
}

/// Assemble the composite adherence report.
///
/// The working set is the last `period_days` entries of `events` by position
/// in the supplied order, not a timestamp filter. Every report field is
/// derived independently from that working set; nothing is recomputed across
/// fields, so a non-monotonic history can show a summary that disagrees with
/// the trend and that is expected.
pub fn generate_adherence_report(
    events: &[DoseEvent],
    medicines: &[Medicine],
    classifications: &DrugClassifications,
    period_days: usize,
) -> Result<AdherenceReport, EngineError> {
    if period_days == 0 {
        return Err(EngineError::InvalidInput(
            "report period must cover at least one day".into(),
        ));
    }

    let window = tail(events, period_days);
    let summary = compute_adherence(window);

    let medicine_breakdown = medicines
        .iter()
        .map(|medicine| {
            let doses: Vec<DoseEvent> = window
                .iter()
                .filter(|e| e.medicine.as_deref() == Some(medicine.id.as_str()))
                .cloned()
                .collect();
            MedicineBreakdown {
                medicine: medicine.name.clone(),
                adherence: compute_adherence(&doses),
                total_doses: doses.len(),
            }
        })
        .collect();

    // First half vs second half of the window, split at floor(len / 2).
    let midpoint = window.len() / 2;
    let first_half = compute_adherence(&window[..midpoint]);
    let second_half = compute_adherence(&window[midpoint..]);
    let trend = if second_half.pct > first_half.pct {
        TrendDirection::Improving
    } else if second_half.pct < first_half.pct {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    let patterns = analyze_behavioral_patterns(window);
    let health_risks = predict_health_risks(window, medicines, classifications);

    tracing::debug!(
        "adherence report assembled: {}% over {} events, {} health risks",
        summary.pct,
        window.len(),
        health_risks.len(),
    );

    Ok(AdherenceReport {
        period_days,
        summary,
        medicine_breakdown,
        trends: AdherenceTrend {
            first_half: first_half.pct,
            second_half: second_half.pct,
            trend,
        },
        insights: patterns.recommendations,
        health_risks,
    })
}

#[cfg(test)]
mod tests {
    use crate::models::enums::{DoseStatus, RecommendationKind, RiskFactorKind, RiskTier};

    use super::*;

    fn dose(medicine_id: &str, status: &str) -> DoseEvent {
        DoseEvent {
            status: DoseStatus::from(status),
            scheduled_time: None,
            actual_time: None,
            medicine: Some(medicine_id.into()),
        }
    }

    fn engine() -> AdherenceEngine {
        AdherenceEngine::new(DrugClassifications::builtin())
    }

    /// A zero-day window is rejected rather than producing an empty report.
    #[test]
    fn zero_period_is_invalid_input() {
        let err = engine().report(&[], &[], 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    /// All sub-computations are restricted to the last `period_days` entries.
    #[test]
    fn window_restricts_every_field() {
        let medicines = vec![Medicine {
            id: "m1".into(),
            name: "Aspirin 81mg".into(),
        }];
        // 10 old misses followed by 7 takes; a 7-day report must only see
        // the takes.
        let mut events = vec![dose("m1", "Missed"); 10];
        events.extend(vec![dose("m1", "Taken"); 7]);

        let report = engine().report(&events, &medicines, 7).unwrap();
        assert_eq!(report.period_days, 7);
        assert_eq!(report.summary.total, 7);
        assert_eq!(report.summary.pct, 100);
        assert_eq!(report.medicine_breakdown[0].total_doses, 7);
        assert_eq!(report.medicine_breakdown[0].adherence.pct, 100);
    }

    /// Per-medicine rows follow the medicines sequence and only count
    /// matching events inside the window.
    #[test]
    fn breakdown_follows_medicines_order() {
        let medicines = vec![
            Medicine {
                id: "m2".into(),
                name: "Vitamin D".into(),
            },
            Medicine {
                id: "m1".into(),
                name: "Aspirin 81mg".into(),
            },
        ];
        let events = vec![
            dose("m1", "Taken"),
            dose("m2", "Missed"),
            dose("m1", "Taken"),
        ];

        let report = engine().report(&events, &medicines, 30).unwrap();
        assert_eq!(report.medicine_breakdown.len(), 2);
        assert_eq!(report.medicine_breakdown[0].medicine, "Vitamin D");
        assert_eq!(report.medicine_breakdown[0].total_doses, 1);
        assert_eq!(report.medicine_breakdown[0].adherence.pct, 0);
        assert_eq!(report.medicine_breakdown[1].medicine, "Aspirin 81mg");
        assert_eq!(report.medicine_breakdown[1].total_doses, 2);
        assert_eq!(report.medicine_breakdown[1].adherence.pct, 100);
    }

    /// A bad first half and clean second half reads as improving.
    #[test]
    fn trend_improving() {
        let mut events = vec![dose("m1", "Missed"); 3];
        events.extend(vec![dose("m1", "Taken"); 3]);

        let report = engine().report(&events, &[], 30).unwrap();
        assert_eq!(report.trends.first_half, 0);
        assert_eq!(report.trends.second_half, 100);
        assert_eq!(report.trends.trend, TrendDirection::Improving);
    }

    /// The reverse reads as declining.
    #[test]
    fn trend_declining() {
        let mut events = vec![dose("m1", "Taken"); 3];
        events.extend(vec![dose("m1", "Missed"); 3]);

        let report = engine().report(&events, &[], 30).unwrap();
        assert_eq!(report.trends.trend, TrendDirection::Declining);
    }

    /// Equal halves, including an empty working set, read as stable.
    #[test]
    fn trend_stable() {
        let events = vec![dose("m1", "Taken"); 4];
        let report = engine().report(&events, &[], 30).unwrap();
        assert_eq!(report.trends.trend, TrendDirection::Stable);

        let empty = engine().report(&[], &[], 30).unwrap();
        assert_eq!(empty.trends.first_half, 100);
        assert_eq!(empty.trends.second_half, 100);
        assert_eq!(empty.trends.trend, TrendDirection::Stable);
    }

    /// The odd middle event lands in the second half of the split.
    #[test]
    fn odd_window_splits_at_floor_midpoint() {
        let events = vec![
            dose("m1", "Taken"),
            dose("m1", "Missed"),
            dose("m1", "Missed"),
        ];
        let report = engine().report(&events, &[], 30).unwrap();
        // midpoint 1: first half is the single take, second half both misses
        assert_eq!(report.trends.first_half, 100);
        assert_eq!(report.trends.second_half, 0);
    }

    /// Insights are the pattern analyzer's recommendations over the window.
    #[test]
    fn insights_come_from_pattern_analyzer() {
        let events = vec![dose("m1", "Taken"); 5];
        let report = engine().report(&events, &[], 30).unwrap();
        assert_eq!(report.insights.len(), 1);
        assert_eq!(report.insights[0].kind, RecommendationKind::Positive);

        // An empty working set produces no insights at all.
        let empty = engine().report(&[], &[], 30).unwrap();
        assert!(empty.insights.is_empty());
    }

    /// Health risks are the predictor's output over the window.
    #[test]
    fn health_risks_come_from_predictor() {
        let medicines = vec![Medicine {
            id: "m1".into(),
            name: "Metformin 500mg".into(),
        }];
        let events = vec![dose("m1", "Taken"), dose("m1", "Missed")];

        let report = engine().report(&events, &medicines, 30).unwrap();
        assert_eq!(report.health_risks.len(), 1);
        assert_eq!(
            report.health_risks[0].kind,
            RiskFactorKind::DiabetesMedicationRisk,
        );
    }

    /// Summary and trend are derived independently; a non-monotonic history
    /// may legitimately disagree between them.
    #[test]
    fn summary_and_trend_are_independent() {
        // 2/6 taken overall (33%, High) while the halves tie at 33% each.
        let events = vec![
            dose("m1", "Taken"),
            dose("m1", "Missed"),
            dose("m1", "Missed"),
            dose("m1", "Missed"),
            dose("m1", "Missed"),
            dose("m1", "Taken"),
        ];
        let report = engine().report(&events, &[], 30).unwrap();
        assert_eq!(report.summary.pct, 33);
        assert_eq!(report.summary.risk, RiskTier::High);
        assert_eq!(report.trends.trend, TrendDirection::Stable);
    }

    /// The default window is 30 days.
    #[test]
    fn default_report_uses_thirty_days() {
        let report = engine().report_default(&[], &[]).unwrap();
        assert_eq!(report.period_days, 30);
    }
}
