use crate::engine::types::EngineError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(EngineError::InvalidInput(format!(
                        "unknown {} value: {}",
                        stringify!($name),
                        s,
                    ))),
                }
            }
        }
    };
}

str_enum!(RiskTier {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

str_enum!(Severity {
    Low => "low",
    Medium => "medium",
    High => "high",
});

str_enum!(TrendDirection {
    Improving => "improving",
    Declining => "declining",
    Stable => "stable",
});

str_enum!(RiskFactorKind {
    ConsecutiveMissed => "consecutive_missed",
    FrequentDelays => "frequent_delays",
    WeekendPattern => "weekend_pattern",
    CriticalMedicineMissed => "critical_medicine_missed",
    BpMedicationRisk => "bp_medication_risk",
    DiabetesMedicationRisk => "diabetes_medication_risk",
});

str_enum!(RecommendationKind {
    Consistency => "consistency",
    Timing => "timing",
    Urgent => "urgent",
    Weekend => "weekend",
    Positive => "positive",
});

str_enum!(InsightLevel {
    HighRisk => "high_risk",
    ModerateRisk => "moderate_risk",
    InconsistentTiming => "inconsistent_timing",
    Excellent => "excellent",
    Good => "good",
});

// ---------------------------------------------------------------------------
// DoseStatus
// ---------------------------------------------------------------------------

/// Outcome of one scheduled administration, as logged by the patient or a
/// caregiver. Matching is exact and case-sensitive; strings the engine does
/// not recognize are preserved as `Other` so they still count toward event
/// totals without entering any status counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DoseStatus {
    Taken,
    Missed,
    Skipped,
    Delayed,
    Other(String),
}

impl DoseStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Taken => "Taken",
            Self::Missed => "Missed",
            Self::Skipped => "Skipped",
            Self::Delayed => "Delayed",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for DoseStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Taken" => Self::Taken,
            "Missed" => Self::Missed,
            "Skipped" => Self::Skipped,
            "Delayed" => Self::Delayed,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for DoseStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<DoseStatus> for String {
    fn from(status: DoseStatus) -> Self {
        match status {
            DoseStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}
