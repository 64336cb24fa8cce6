use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::DoseStatus;

/// One recorded (or missed) medication administration, created by the logging
/// collaborator at the moment the action is recorded and immutable afterwards.
///
/// Sequences handed to the engine are in chronological order, oldest first.
/// The engine never reorders them; last-N windows and consecutive-run scans
/// rely on that ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseEvent {
    pub status: DoseStatus,
    /// When the dose was due. Absent values exclude the event from
    /// timing-accuracy and weekend-pattern analysis.
    pub scheduled_time: Option<NaiveDateTime>,
    /// When the dose was actually acted upon. Present only when the status
    /// implies an action occurred, typically `Taken`.
    pub actual_time: Option<NaiveDateTime>,
    /// Id of the `Medicine` this dose belongs to. Events without one are
    /// excluded from per-medicine breakdowns and risk prediction.
    pub medicine: Option<String>,
}
