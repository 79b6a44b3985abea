use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::group::GroupLabel;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    /// Three-letter FIFA code, e.g. `FRA`
    pub code: String,
    pub flag: Option<String>,
    #[serde(rename = "groupName")]
    pub group: GroupLabel,
}

impl Team {
    pub fn new(name: impl Into<String>, code: impl Into<String>, group: GroupLabel) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            code: code.into(),
            flag: None,
            group,
        }
    }

    pub fn summary(&self) -> TeamSummary {
        TeamSummary {
            id: self.id,
            name: self.name.clone(),
            code: self.code.clone(),
            flag: self.flag.clone(),
        }
    }
}

/// Team reference embedded in games and standings rows
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub flag: Option<String>,
}
