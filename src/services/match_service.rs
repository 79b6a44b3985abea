use std::sync::Arc;
use uuid::Uuid;

use crate::db::store::TournamentStore;
use crate::errors::ApiError;
use crate::models::game::Game;
use crate::tournament::lifecycle::{self, LifecycleError, Transition};

/// Admin-side match operations: apply a lifecycle transition and persist it
pub struct MatchService {
    store: Arc<dyn TournamentStore>,
}

impl MatchService {
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self { store }
    }

    fn load(&self, game_id: Uuid) -> Result<Game, ApiError> {
        self.store
            .game(game_id)?
            .ok_or_else(|| ApiError::not_found("Match"))
    }

    /// Load, transition, save. The save happens before returning so the new
    /// state is what the next reader sees.
    fn transition<F>(&self, game_id: Uuid, action: Transition, apply: F) -> Result<Game, ApiError>
    where
        F: FnOnce(&mut Game) -> Result<(), LifecycleError>,
    {
        let mut game = self.load(game_id)?;

        if let Err(e) = apply(&mut game) {
            tracing::warn!("Rejected {:?} on match {}: {}", action, game_id, e);
            return Err(e.into());
        }

        self.store.save_game(&game)?;
        Ok(game)
    }

    /// Kick off a scheduled match (0-0)
    pub fn start_match(&self, game_id: Uuid) -> Result<Game, ApiError> {
        let game = self.transition(game_id, Transition::Start, lifecycle::start)?;
        tracing::info!("🎮 Started match {}", game.id);
        Ok(game)
    }

    /// Overwrite the score of a live match
    pub fn update_score(&self, game_id: Uuid, home_score: i64, away_score: i64) -> Result<Game, ApiError> {
        let game = self.transition(game_id, Transition::UpdateScore, |game| {
            lifecycle::update_score(game, home_score, away_score)
        })?;
        tracing::info!("⚽ Match {} score is now {} - {}", game.id, home_score, away_score);
        Ok(game)
    }

    /// Finish a live match. Omitted scores keep their live value.
    pub fn finish_match(
        &self,
        game_id: Uuid,
        home_score: Option<i64>,
        away_score: Option<i64>,
    ) -> Result<Game, ApiError> {
        let game = self.transition(game_id, Transition::Finish, |game| {
            lifecycle::finish(game, home_score, away_score)
        })?;
        if let Some((home, away)) = game.state.score() {
            tracing::info!("🏁 Finished match {} at {} - {}", game.id, home, away);
        }
        Ok(game)
    }
}
