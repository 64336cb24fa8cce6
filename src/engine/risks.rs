use crate::config;
use crate::models::enums::{DoseStatus, RiskFactorKind, Severity};
use crate::models::{DoseEvent, Medicine};

use super::messages::MessageTemplates;
use super::reference::DrugClassifications;
use super::types::RiskFactor;

/// Cross-reference each medicine's recent event history against the
/// drug-classification tables and flag medicine-specific danger conditions.
///
/// For every medicine, in the order given, the predictor takes the most
/// recent `MEDICINE_RISK_WINDOW_EVENTS` of its events (by position, oldest
/// first) and checks the critical, blood-pressure, and diabetes tables in
/// that order. A name matching several tables emits one factor per match.
pub fn predict_health_risks(
    events: &[DoseEvent],
    medicines: &[Medicine],
    classifications: &DrugClassifications,
) -> Vec<RiskFactor> {
    let mut risks = Vec::new();

    for medicine in medicines {
        let history: Vec<&DoseEvent> = events
            .iter()
            .filter(|e| e.medicine.as_deref() == Some(medicine.id.as_str()))
            .collect();
        let recent = &history[history
            .len()
            .saturating_sub(config::MEDICINE_RISK_WINDOW_EVENTS)..];
        let missed = recent
            .iter()
            .filter(|e| e.status == DoseStatus::Missed)
            .count();

        if classifications.is_critical(&medicine.name)
            && missed >= config::CRITICAL_MISSED_THRESHOLD
        {
            risks.push(RiskFactor {
                kind: RiskFactorKind::CriticalMedicineMissed,
                severity: Severity::High,
                message: MessageTemplates::critical_missed(&medicine.name, missed),
                medicine: Some(medicine.name.clone()),
                action: Some(MessageTemplates::critical_missed_action()),
            });
        }

        if classifications.is_blood_pressure(&medicine.name)
            && missed >= config::MAINTENANCE_MISSED_THRESHOLD
        {
            risks.push(RiskFactor {
                kind: RiskFactorKind::BpMedicationRisk,
                severity: Severity::High,
                message: MessageTemplates::bp_risk(),
                medicine: Some(medicine.name.clone()),
                action: Some(MessageTemplates::bp_risk_action()),
            });
        }

        if classifications.is_diabetes(&medicine.name)
            && missed >= config::MAINTENANCE_MISSED_THRESHOLD
        {
            risks.push(RiskFactor {
                kind: RiskFactorKind::DiabetesMedicationRisk,
                severity: Severity::High,
                message: MessageTemplates::diabetes_risk(),
                medicine: Some(medicine.name.clone()),
                action: Some(MessageTemplates::diabetes_risk_action()),
            });
        }
    }

    risks
}
