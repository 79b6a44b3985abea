use std::sync::Arc;

use crate::db::store::TournamentStore;
use crate::errors::ApiError;
use crate::models::group::GroupLabel;
use crate::models::standings::GroupStandings;
use crate::tournament::standings::{compute_standings_with, NameOrdering};

/// Service responsible for group standings. Nothing is cached: every call
/// reads the roster and finished matches and recomputes the table.
pub struct StandingsService {
    store: Arc<dyn TournamentStore>,
    ordering: NameOrdering,
}

impl StandingsService {
    pub fn new(store: Arc<dyn TournamentStore>, ordering: NameOrdering) -> Self {
        Self { store, ordering }
    }

    /// Standings of a single group
    pub fn group_standings(&self, group: GroupLabel) -> Result<GroupStandings, ApiError> {
        let teams = self.store.teams_in_group(group)?;
        let games = self.store.finished_games_in_group(group)?;

        tracing::debug!(
            "Computing standings for group {} from {} teams and {} finished matches",
            group, teams.len(), games.len()
        );

        Ok(GroupStandings {
            group,
            standings: compute_standings_with(&teams, &games, self.ordering),
        })
    }

    /// Standings of every group that has teams, in label order
    pub fn all_standings(&self) -> Result<Vec<GroupStandings>, ApiError> {
        let mut tables = Vec::new();
        for group in GroupLabel::all() {
            let table = self.group_standings(group)?;
            if !table.standings.is_empty() {
                tables.push(table);
            }
        }
        Ok(tables)
    }
}
