use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::models::group::GroupLabel;
use crate::models::phase::{Phase, PhaseSummary};
use crate::models::stadium::{Stadium, StadiumSummary};
use crate::models::team::{Team, TeamSummary};

/// A match record. `group` is `None` for knockout games.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub stadium_id: Uuid,
    pub phase_id: Uuid,
    pub kickoff: DateTime<Utc>,
    pub group: Option<GroupLabel>,
    pub state: GameState,
}

impl Game {
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }
}

/// Lifecycle state of a game. Scores exist only once the game has started.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GameState {
    Scheduled,
    Live { home: u32, away: u32 },
    Finished { home: u32, away: u32 },
}

impl GameState {
    pub fn status(&self) -> GameStatus {
        match self {
            GameState::Scheduled => GameStatus::Scheduled,
            GameState::Live { .. } => GameStatus::Live,
            GameState::Finished { .. } => GameStatus::Finished,
        }
    }

    /// `(home, away)` for live and finished games
    pub fn score(&self) -> Option<(u32, u32)> {
        match *self {
            GameState::Scheduled => None,
            GameState::Live { home, away } | GameState::Finished { home, away } => Some((home, away)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Scheduled,
    Live,
    Finished,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::Live => "live",
            GameStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(GameStatus::Scheduled),
            "live" => Ok(GameStatus::Live),
            "finished" => Ok(GameStatus::Finished),
            other => Err(format!(
                "{} is not a supported match status. \
                Use either `scheduled`, `live` or `finished`.",
                other
            )),
        }
    }
}

/// JSON representation of a game with its teams, stadium and phase resolved
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: Uuid,
    pub home_team: TeamSummary,
    pub away_team: TeamSummary,
    pub stadium: StadiumSummary,
    pub phase: PhaseSummary,
    pub match_date: DateTime<Utc>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub status: GameStatus,
    pub group_name: Option<GroupLabel>,
}

impl GameView {
    pub fn new(game: &Game, home: &Team, away: &Team, stadium: &Stadium, phase: &Phase) -> Self {
        let score = game.state.score();
        Self {
            id: game.id,
            home_team: home.summary(),
            away_team: away.summary(),
            stadium: stadium.summary(),
            phase: phase.summary(),
            match_date: game.kickoff,
            home_score: score.map(|(home, _)| home),
            away_score: score.map(|(_, away)| away),
            status: game.status(),
            group_name: game.group,
        }
    }
}
