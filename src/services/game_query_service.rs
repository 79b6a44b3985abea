use std::sync::Arc;
use uuid::Uuid;

use crate::db::store::{GameFilter, TournamentStore};
use crate::errors::ApiError;
use crate::models::game::{Game, GameView};

/// Read side for matches: queries the store and resolves teams, stadium and
/// phase into the JSON view
pub struct GameQueryService {
    store: Arc<dyn TournamentStore>,
}

impl GameQueryService {
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self { store }
    }

    pub fn list(&self, filter: &GameFilter) -> Result<Vec<GameView>, ApiError> {
        let games = self.store.games(filter)?;
        let mut views = Vec::with_capacity(games.len());
        for game in &games {
            match self.view(game)? {
                Some(view) => views.push(view),
                None => tracing::warn!("Match {} references missing data, left out of listing", game.id),
            }
        }
        Ok(views)
    }

    pub fn get(&self, game_id: Uuid) -> Result<GameView, ApiError> {
        let game = self
            .store
            .game(game_id)?
            .ok_or_else(|| ApiError::not_found("Match"))?;
        self.view(&game)?.ok_or_else(|| ApiError::not_found("Match"))
    }

    /// `None` when a referenced team, stadium or phase no longer exists
    pub fn view(&self, game: &Game) -> Result<Option<GameView>, ApiError> {
        let home = self.store.team(game.home_team_id)?;
        let away = self.store.team(game.away_team_id)?;
        let stadium = self.store.stadium(game.stadium_id)?;
        let phase = self.store.phase(game.phase_id)?;

        Ok(match (home, away, stadium, phase) {
            (Some(home), Some(away), Some(stadium), Some(phase)) => {
                Some(GameView::new(game, &home, &away, &stadium, &phase))
            }
            _ => None,
        })
    }
}
