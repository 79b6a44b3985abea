use serde::{Deserialize, Serialize};

use crate::models::group::GroupLabel;
use crate::models::team::TeamSummary;

/// One line of a group table. Derived on every query, never stored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub position: u32,
    pub team: TeamSummary,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GroupStandings {
    pub group: GroupLabel,
    pub standings: Vec<StandingsRow>,
}
