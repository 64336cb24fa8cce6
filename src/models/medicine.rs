use serde::{Deserialize, Serialize};

/// A prescribed drug, defined by the prescribing collaborator.
///
/// `name` is free text and is matched case-insensitively by substring
/// against the drug-classification tables; `id` correlates dose events
/// to this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: String,
    pub name: String,
}
