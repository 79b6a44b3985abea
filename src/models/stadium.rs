use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Stadium {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub country: String,
    pub capacity: u32,
}

impl Stadium {
    pub fn summary(&self) -> StadiumSummary {
        StadiumSummary {
            id: self.id,
            name: self.name.clone(),
            city: self.city.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StadiumSummary {
    pub id: Uuid,
    pub name: String,
    pub city: String,
}
