//! Adhera is a medication-adherence analytics engine. It consumes dose-event
//! logs and medicine metadata collected by external collaborators and turns
//! them into adherence percentages, risk classifications, behavioral
//! patterns, medicine-specific health risks, and composite reports.
//!
//! The whole crate is a library boundary: no network, file, or wire surface
//! of its own beyond loading the drug-classification resource, and no
//! mutable state. Every computation is a pure function of its arguments, so
//! calls can run concurrently without coordination.
//!
//! ```
//! use adhera::{AdherenceEngine, DoseEvent, DoseStatus, DrugClassifications, Medicine};
//!
//! let engine = AdherenceEngine::new(DrugClassifications::builtin());
//! let medicines = vec![Medicine { id: "m1".into(), name: "Metformin 500mg".into() }];
//! let events = vec![DoseEvent {
//!     status: DoseStatus::Taken,
//!     scheduled_time: None,
//!     actual_time: None,
//!     medicine: Some("m1".into()),
//! }];
//!
//! let report = engine.report_default(&events, &medicines).unwrap();
//! assert_eq!(report.summary.pct, 100);
//! ```

pub mod config;
pub mod engine;
pub mod models;

pub use engine::reference::DrugClassifications;
pub use engine::types::{
    AdherenceMetric, AdherenceReport, AdherenceTrend, EngineError, Insight, MedicineBreakdown,
    PatternAnalysis, Recommendation, RiskFactor,
};
pub use engine::{
    analyze_behavioral_patterns, compute_adherence, generate_adherence_report,
    predict_health_risks, quick_insight, AdherenceEngine,
};
pub use models::enums::{
    DoseStatus, InsightLevel, RecommendationKind, RiskFactorKind, RiskTier, Severity,
    TrendDirection,
};
pub use models::{DoseEvent, Medicine};
