use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Competition phase (group stage, round of 16, ...), ordered by `display_order`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub display_order: i32,
}

impl Phase {
    pub fn summary(&self) -> PhaseSummary {
        PhaseSummary {
            id: self.id,
            name: self.name.clone(),
            code: self.code.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PhaseSummary {
    pub id: Uuid,
    pub name: String,
    pub code: String,
}
