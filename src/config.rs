/// Application-level constants
pub const APP_NAME: &str = "Adhera";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// Business constants
// ---------------------------------------------------------------------------
// Every threshold the engine applies lives here so the rules can be read
// (and retuned) in one place.

/// Adherence below this percentage is classified High risk.
pub const HIGH_RISK_BELOW_PCT: u8 = 60;

/// Adherence below this percentage (and at or above the High bound) is
/// classified Medium risk. At or above it is Low risk.
pub const MEDIUM_RISK_BELOW_PCT: u8 = 80;

/// Consistency scores under this value trigger a routine-building recommendation.
pub const LOW_CONSISTENCY_BELOW: f64 = 70.0;

/// Timing-accuracy scores under this value trigger an earlier-reminder recommendation.
pub const LOW_TIMING_ACCURACY_BELOW: f64 = 80.0;

/// Average delay (minutes) at which timing accuracy bottoms out at 0.
pub const DELAY_FLOOR_MINUTES: f64 = 30.0;

/// Number of most recent events the pattern analyzer scans for risk factors.
pub const PATTERN_WINDOW_EVENTS: usize = 7;

/// Trailing missed-dose run length that raises a consecutive-missed factor.
pub const CONSECUTIVE_MISSED_THRESHOLD: usize = 3;

/// Delayed-dose count within the pattern window that raises a frequent-delays factor.
pub const FREQUENT_DELAY_THRESHOLD: usize = 3;

/// Weekend missed-dose count within the pattern window that raises a weekend-pattern factor.
pub const WEEKEND_MISSED_THRESHOLD: usize = 2;

/// Number of most recent per-medicine events the risk predictor inspects.
pub const MEDICINE_RISK_WINDOW_EVENTS: usize = 14;

/// Missed-dose count that flags a critical medicine.
pub const CRITICAL_MISSED_THRESHOLD: usize = 2;

/// Missed-dose count that flags a blood-pressure or diabetes medicine.
pub const MAINTENANCE_MISSED_THRESHOLD: usize = 1;

/// Report window used when the caller does not specify one.
pub const DEFAULT_REPORT_PERIOD_DAYS: usize = 30;
