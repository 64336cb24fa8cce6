use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::EngineError;

/// File name the classification tables are loaded from.
pub const CLASSIFICATIONS_FILE: &str = "drug_classifications.json";

/// Drug-name classification tables (loaded from drug_classifications.json).
///
/// Each table holds generic-name fragments; a medicine belongs to a category
/// when its free-text name contains any fragment, compared case-insensitively.
/// A name may match more than one table and each match is reported
/// independently. Load once at startup and share by reference; the engine
/// never mutates the tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugClassifications {
    pub critical: Vec<String>,
    pub blood_pressure: Vec<String>,
    pub diabetes: Vec<String>,
}

impl DrugClassifications {
    /// Load the classification tables from `resources_dir`.
    pub fn load(resources_dir: &Path) -> Result<Self, EngineError> {
        let path = resources_dir.join(CLASSIFICATIONS_FILE);

        let json = std::fs::read_to_string(&path).map_err(|e| {
            EngineError::ReferenceDataLoad(path.display().to_string(), e.to_string())
        })?;
        let tables: Self = serde_json::from_str(&json).map_err(|e| {
            EngineError::ReferenceDataParse(CLASSIFICATIONS_FILE.into(), e.to_string())
        })?;

        tracing::info!(
            "drug classification tables loaded: {} critical, {} blood pressure, {} diabetes",
            tables.critical.len(),
            tables.blood_pressure.len(),
            tables.diabetes.len(),
        );
        Ok(tables)
    }

    /// Bundled membership, no file I/O. Mirrors resources/drug_classifications.json.
    pub fn builtin() -> Self {
        let list = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            critical: list(&[
                "warfarin",
                "digoxin",
                "lithium",
                "phenytoin",
                "carbamazepine",
                "valproic acid",
                "theophylline",
                "cyclosporine",
                "tacrolimus",
            ]),
            blood_pressure: list(&[
                "lisinopril",
                "amlodipine",
                "metoprolol",
                "losartan",
                "hydrochlorothiazide",
                "atenolol",
                "ramipril",
                "valsartan",
                "carvedilol",
                "diltiazem",
            ]),
            diabetes: list(&[
                "metformin",
                "insulin",
                "glipizide",
                "glyburide",
                "pioglitazone",
                "rosiglitazone",
                "sitagliptin",
                "saxagliptin",
                "linagliptin",
            ]),
        }
    }

    /// Whether the medicine name matches the critical table.
    pub fn is_critical(&self, medicine_name: &str) -> bool {
        Self::matches(&self.critical, medicine_name)
    }

    /// Whether the medicine name matches the blood-pressure table.
    pub fn is_blood_pressure(&self, medicine_name: &str) -> bool {
        Self::matches(&self.blood_pressure, medicine_name)
    }

    /// Whether the medicine name matches the diabetes table.
    pub fn is_diabetes(&self, medicine_name: &str) -> bool {
        Self::matches(&self.diabetes, medicine_name)
    }

    fn matches(table: &[String], medicine_name: &str) -> bool {
        let lower = medicine_name.to_lowercase();
        table.iter().any(|fragment| lower.contains(&fragment.to_lowercase()))
    }
}

impl Default for DrugClassifications {
    fn default() -> Self {
        Self::builtin()
    }
}
