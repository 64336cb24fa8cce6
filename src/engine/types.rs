use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::enums::{
    InsightLevel, RecommendationKind, RiskFactorKind, RiskTier, Severity, TrendDirection,
};

// ---------------------------------------------------------------------------
// AdherenceMetric
// ---------------------------------------------------------------------------

/// Aggregate view of a dose-event history: per-status counters, the
/// percentage of doses taken, and the coarse risk tier derived from it.
///
/// `total` is the raw event count, not the sum of the four counters; events
/// with unrecognized status strings widen the denominator without entering
/// any counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdherenceMetric {
    pub pct: u8,
    pub risk: RiskTier,
    pub taken: usize,
    pub missed: usize,
    pub skipped: usize,
    pub delayed: usize,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// PatternAnalysis
// ---------------------------------------------------------------------------

/// Behavioral signals derived from a dose-event history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    /// 0-100. How close to the same clock time doses are taken.
    pub consistency: f64,
    /// 0-100. How close to the scheduled time doses are taken.
    pub timing_accuracy: f64,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendations: Vec<Recommendation>,
}

/// A structural risk condition detected in the event history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    #[serde(rename = "type")]
    pub kind: RiskFactorKind,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medicine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Free-text advice derived from the computed pattern fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub message: String,
}

// ---------------------------------------------------------------------------
// AdherenceReport
// ---------------------------------------------------------------------------

/// Composite report over a bounded window of the event history. Each field
/// is derived independently from the same working set; no cross-field
/// recomputation happens, so a non-monotonic history can legitimately show
/// a `summary` that disagrees with `trends`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdherenceReport {
    pub period_days: usize,
    pub summary: AdherenceMetric,
    pub medicine_breakdown: Vec<MedicineBreakdown>,
    pub trends: AdherenceTrend,
    pub insights: Vec<Recommendation>,
    pub health_risks: Vec<RiskFactor>,
}

/// Per-medicine slice of the report window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicineBreakdown {
    pub medicine: String,
    pub adherence: AdherenceMetric,
    pub total_doses: usize,
}

/// First-half vs second-half comparison of the report window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdherenceTrend {
    pub first_half: u8,
    pub second_half: u8,
    pub trend: TrendDirection,
}

// ---------------------------------------------------------------------------
// Insight
// ---------------------------------------------------------------------------

/// One-line adherence summary for dashboard surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub level: InsightLevel,
    pub message: String,
}

// ---------------------------------------------------------------------------
// EngineError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Reference data load failed ({0}): {1}")]
    ReferenceDataLoad(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_factor_serializes_type_tag_and_omits_absent_fields() {
        let factor = RiskFactor {
            kind: RiskFactorKind::FrequentDelays,
            severity: Severity::Medium,
            message: "Frequent medication delays detected".into(),
            medicine: None,
            action: None,
        };
        let json = serde_json::to_string(&factor).unwrap();
        assert!(json.contains("\"type\":\"frequent_delays\""));
        assert!(json.contains("\"severity\":\"medium\""));
        assert!(!json.contains("medicine"));
        assert!(!json.contains("action"));
    }

    #[test]
    fn recommendation_serializes_type_tag() {
        let rec = Recommendation {
            kind: RecommendationKind::Positive,
            message: "ok".into(),
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"type\":\"positive\""));
    }
}
