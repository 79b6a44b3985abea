//! Match lifecycle: `scheduled -> live -> finished`.
//!
//! Each transition is a single synchronous step on one game. Persisting the
//! result is the caller's job (see `services::match_service`).

use serde::Serialize;
use std::fmt;
use thiserror::Error as ThisError;

use crate::models::game::{Game, GameState, GameStatus};
use crate::tournament::validation::TournamentValidator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Start,
    UpdateScore,
    Finish,
}

impl Transition {
    /// Status the game must be in for this transition to apply
    pub fn required_status(&self) -> GameStatus {
        match self {
            Transition::Start => GameStatus::Scheduled,
            Transition::UpdateScore | Transition::Finish => GameStatus::Live,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Transition::Start => "start",
            Transition::UpdateScore => "update the score of",
            Transition::Finish => "finish",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum LifecycleError {
    #[error("Cannot {action} a match that is {current}, it must be {}", .action.required_status())]
    InvalidTransition {
        action: Transition,
        current: GameStatus,
    },

    #[error("Invalid score {value}: scores must be non-negative integers")]
    InvalidScore { value: String },
}

impl GameState {
    /// `scheduled -> live`, scores reset to 0-0
    pub fn start(self) -> Result<GameState, LifecycleError> {
        match self {
            GameState::Scheduled => Ok(GameState::Live { home: 0, away: 0 }),
            other => Err(invalid(Transition::Start, other)),
        }
    }

    /// Overwrite the live score, status unchanged
    pub fn with_score(self, home: u32, away: u32) -> Result<GameState, LifecycleError> {
        match self {
            GameState::Live { .. } => Ok(GameState::Live { home, away }),
            other => Err(invalid(Transition::UpdateScore, other)),
        }
    }

    /// `live -> finished`. A side left as `None` keeps its live value.
    pub fn finish(self, home: Option<u32>, away: Option<u32>) -> Result<GameState, LifecycleError> {
        match self {
            GameState::Live { home: live_home, away: live_away } => Ok(GameState::Finished {
                home: home.unwrap_or(live_home),
                away: away.unwrap_or(live_away),
            }),
            other => Err(invalid(Transition::Finish, other)),
        }
    }
}

fn invalid(action: Transition, state: GameState) -> LifecycleError {
    LifecycleError::InvalidTransition {
        action,
        current: state.status(),
    }
}

fn ensure_status(game: &Game, action: Transition) -> Result<(), LifecycleError> {
    if game.status() == action.required_status() {
        Ok(())
    } else {
        Err(invalid(action, game.state))
    }
}

/// Kick off a scheduled game
pub fn start(game: &mut Game) -> Result<(), LifecycleError> {
    game.state = game.state.start()?;
    Ok(())
}

/// Record a new live score. Status is checked before the scores.
pub fn update_score(game: &mut Game, home: i64, away: i64) -> Result<(), LifecycleError> {
    ensure_status(game, Transition::UpdateScore)?;

    let validator = TournamentValidator::new();
    let home = validator.validate_score(home)?;
    let away = validator.validate_score(away)?;

    game.state = game.state.with_score(home, away)?;
    Ok(())
}

/// Finish a live game, optionally overriding the final score
pub fn finish(game: &mut Game, home: Option<i64>, away: Option<i64>) -> Result<(), LifecycleError> {
    ensure_status(game, Transition::Finish)?;

    let validator = TournamentValidator::new();
    let home = home.map(|score| validator.validate_score(score)).transpose()?;
    let away = away.map(|score| validator.validate_score(score)).transpose()?;

    game.state = game.state.finish(home, away)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let live = GameState::Scheduled.start().unwrap();
        assert_eq!(live, GameState::Live { home: 0, away: 0 });

        let live = live.with_score(2, 1).unwrap();
        assert_eq!(live.finish(None, Some(3)).unwrap(), GameState::Finished { home: 2, away: 3 });
    }

    #[test]
    fn test_finished_is_terminal() {
        let finished = GameState::Finished { home: 1, away: 0 };

        assert!(finished.start().is_err());
        assert!(finished.with_score(5, 5).is_err());
        assert!(finished.finish(None, None).is_err());
    }

    #[test]
    fn test_error_reports_current_status() {
        let err = GameState::Scheduled.finish(None, None).unwrap_err();
        assert_eq!(
            err,
            LifecycleError::InvalidTransition {
                action: Transition::Finish,
                current: GameStatus::Scheduled,
            }
        );
        assert_eq!(
            err.to_string(),
            "Cannot finish a match that is scheduled, it must be live"
        );
    }
}
