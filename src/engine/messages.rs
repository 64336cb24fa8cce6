/// Message template builder for every user-facing string the engine emits.
/// Presentation collaborators render these verbatim, so wording changes
/// happen here and nowhere else.
pub struct MessageTemplates;

impl MessageTemplates {
    // --- Risk factor messages ---

    /// CONSECUTIVE MISSED message, citing the exact run length.
    pub fn consecutive_missed(count: usize) -> String {
        format!("{} consecutive missed doses", count)
    }

    /// FREQUENT DELAYS message.
    pub fn frequent_delays() -> String {
        "Frequent medication delays detected".to_string()
    }

    /// WEEKEND PATTERN message.
    pub fn weekend_pattern() -> String {
        "Poor adherence on weekends".to_string()
    }

    /// CRITICAL MEDICINE message, citing the medicine and missed count.
    pub fn critical_missed(medicine: &str, count: usize) -> String {
        format!(
            "Critical medicine {} missed {} times in 2 weeks",
            medicine, count,
        )
    }

    pub fn critical_missed_action() -> String {
        "Contact doctor immediately".to_string()
    }

    /// BLOOD PRESSURE risk message.
    pub fn bp_risk() -> String {
        "Skipped blood pressure medication - risk of hypertension complications".to_string()
    }

    pub fn bp_risk_action() -> String {
        "Monitor blood pressure and contact doctor".to_string()
    }

    /// DIABETES risk message.
    pub fn diabetes_risk() -> String {
        "Skipped diabetes medication - risk of blood sugar complications".to_string()
    }

    pub fn diabetes_risk_action() -> String {
        "Monitor blood sugar levels and contact doctor".to_string()
    }

    // --- Recommendations ---

    pub fn recommend_consistency() -> String {
        "Try taking medications at the same time each day. \
         Set phone reminders to help build a routine."
            .to_string()
    }

    pub fn recommend_timing() -> String {
        "Consider setting multiple reminders 15 minutes before your \
         scheduled medication time."
            .to_string()
    }

    pub fn recommend_urgent() -> String {
        "Contact your doctor immediately. Multiple missed doses can be dangerous.".to_string()
    }

    pub fn recommend_weekend() -> String {
        "Set weekend-specific reminders or use a pill organizer for weekends.".to_string()
    }

    pub fn recommend_positive() -> String {
        "Great job! You're maintaining excellent medication adherence. \
         Keep up the good work!"
            .to_string()
    }

    // --- Quick insights ---

    pub fn insight_high_risk() -> String {
        "High risk: multiple missed doses - notify doctor immediately".to_string()
    }

    pub fn insight_moderate_risk() -> String {
        "Moderate risk: inconsistent medication adherence - consider setting reminders"
            .to_string()
    }

    pub fn insight_inconsistent_timing() -> String {
        "Try to take medications at more consistent times".to_string()
    }

    pub fn insight_excellent() -> String {
        "Excellent adherence this week!".to_string()
    }

    pub fn insight_good() -> String {
        "Good adherence - keep up the routine!".to_string()
    }
}
