use serde_json::Value;
use thiserror::Error as ThisError;

use crate::models::game::{GameState, GameStatus};
use crate::models::group::GroupLabel;
use crate::models::team::Team;
use crate::tournament::lifecycle::LifecycleError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    #[error("Team code '{0}' must be exactly three uppercase letters")]
    InvalidTeamCode(String),

    #[error("Team name cannot be empty")]
    EmptyTeamName,

    #[error("A team cannot play against itself ({0})")]
    SameTeam(String),

    #[error("Group {group} game between {home} and {away} mixes teams from different groups")]
    GroupMismatch {
        group: String,
        home: String,
        away: String,
    },
}

/// Centralized validation for tournament input
pub struct TournamentValidator;

impl TournamentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a single score value coming from an admin request
    pub fn validate_score(&self, value: i64) -> Result<u32, LifecycleError> {
        u32::try_from(value).map_err(|_| LifecycleError::InvalidScore {
            value: value.to_string(),
        })
    }

    /// Read a score from raw JSON. Only integers are accepted, nothing is
    /// coerced; the range is checked by `validate_score` once the match status
    /// allows the change.
    pub fn parse_score_value(&self, value: &Value) -> Result<i64, LifecycleError> {
        value.as_i64().ok_or_else(|| LifecycleError::InvalidScore {
            value: value.to_string(),
        })
    }

    /// Validate team name and FIFA code
    pub fn validate_team(&self, team: &Team) -> Result<(), ValidationError> {
        if team.name.trim().is_empty() {
            return Err(ValidationError::EmptyTeamName);
        }

        let code_ok = team.code.len() == 3 && team.code.chars().all(|c| c.is_ascii_uppercase());
        if !code_ok {
            return Err(ValidationError::InvalidTeamCode(team.code.clone()));
        }

        Ok(())
    }

    /// Validate the pairing of a game: distinct teams, and same group for group-stage games
    pub fn validate_pairing(
        &self,
        home: &Team,
        away: &Team,
        group: Option<GroupLabel>,
    ) -> Result<(), ValidationError> {
        if home.id == away.id {
            return Err(ValidationError::SameTeam(home.code.clone()));
        }

        if let Some(group) = group {
            if home.group != group || away.group != group {
                return Err(ValidationError::GroupMismatch {
                    group: group.to_string(),
                    home: home.code.clone(),
                    away: away.code.clone(),
                });
            }
        }

        Ok(())
    }

    /// Build a game state from a status plus optional scores, enforcing that
    /// scores are present exactly when the game has kicked off
    pub fn state_from_parts(
        &self,
        status: GameStatus,
        home: Option<i64>,
        away: Option<i64>,
    ) -> Result<GameState, LifecycleError> {
        match (status, home, away) {
            (GameStatus::Scheduled, None, None) => Ok(GameState::Scheduled),
            (GameStatus::Scheduled, _, _) => Err(LifecycleError::InvalidScore {
                value: "a scheduled match cannot carry a score".to_string(),
            }),
            (GameStatus::Live, Some(home), Some(away)) => Ok(GameState::Live {
                home: self.validate_score(home)?,
                away: self.validate_score(away)?,
            }),
            (GameStatus::Finished, Some(home), Some(away)) => Ok(GameState::Finished {
                home: self.validate_score(home)?,
                away: self.validate_score(away)?,
            }),
            (status, _, _) => Err(LifecycleError::InvalidScore {
                value: format!("a {} match needs both scores", status),
            }),
        }
    }
}

impl Default for TournamentValidator {
    fn default() -> Self {
        Self::new()
    }
}
