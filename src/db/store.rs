use chrono::NaiveDate;
use thiserror::Error as ThisError;
use uuid::Uuid;

use crate::models::game::{Game, GameStatus};
use crate::models::group::GroupLabel;
use crate::models::phase::Phase;
use crate::models::stadium::Stadium;
use crate::models::team::Team;

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("Tournament store is unavailable: {0}")]
    Unavailable(String),

    #[error("Cannot save unknown match {0}")]
    UnknownGame(Uuid),
}

/// Optional filters for listing games; `None` means "any"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFilter {
    pub phase_code: Option<String>,
    pub group: Option<GroupLabel>,
    pub status: Option<GameStatus>,
    pub date: Option<NaiveDate>,
}

impl GameFilter {
    pub fn with_status(status: GameStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn with_phase(phase_code: impl Into<String>) -> Self {
        Self {
            phase_code: Some(phase_code.into()),
            ..Default::default()
        }
    }

    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Default::default()
        }
    }

    /// Check every filter except the phase code, which needs a phase lookup
    pub fn matches(&self, game: &Game) -> bool {
        self.group.map_or(true, |group| game.group == Some(group))
            && self.status.map_or(true, |status| game.status() == status)
            && self.date.map_or(true, |date| game.kickoff.date_naive() == date)
    }
}

/// Everything the services need from storage.
///
/// `save_game` must make the write visible to every read that follows it.
pub trait TournamentStore: Send + Sync {
    /// All teams ordered by group, then name
    fn teams(&self) -> Result<Vec<Team>, StoreError>;
    fn team(&self, id: Uuid) -> Result<Option<Team>, StoreError>;
    /// Teams of one group ordered by name
    fn teams_in_group(&self, group: GroupLabel) -> Result<Vec<Team>, StoreError>;

    /// All stadiums ordered by name
    fn stadiums(&self) -> Result<Vec<Stadium>, StoreError>;
    fn stadium(&self, id: Uuid) -> Result<Option<Stadium>, StoreError>;

    /// All phases ordered by display order
    fn phases(&self) -> Result<Vec<Phase>, StoreError>;
    fn phase(&self, id: Uuid) -> Result<Option<Phase>, StoreError>;
    fn phase_by_code(&self, code: &str) -> Result<Option<Phase>, StoreError>;

    /// Games matching `filter`, ordered by kickoff
    fn games(&self, filter: &GameFilter) -> Result<Vec<Game>, StoreError>;
    fn game(&self, id: Uuid) -> Result<Option<Game>, StoreError>;
    /// Finished games of one group ordered by kickoff
    fn finished_games_in_group(&self, group: GroupLabel) -> Result<Vec<Game>, StoreError>;

    fn save_game(&self, game: &Game) -> Result<(), StoreError>;
}
