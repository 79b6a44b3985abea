//! Seeding the store from a JSON fixture file.
//!
//! Games reference teams by FIFA code, stadiums by name and phases by code;
//! ids are generated while loading.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;
use uuid::Uuid;

use crate::db::memory_store::MemoryStore;
use crate::db::store::StoreError;
use crate::models::game::{Game, GameStatus};
use crate::models::group::GroupLabel;
use crate::models::phase::Phase;
use crate::models::stadium::Stadium;
use crate::models::team::Team;
use crate::tournament::lifecycle::LifecycleError;
use crate::tournament::validation::{TournamentValidator, ValidationError};

#[derive(Debug, ThisError)]
pub enum FixtureError {
    #[error("Failed to read fixture file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed fixture file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate team code {0}")]
    DuplicateTeamCode(String),

    #[error("Duplicate phase code {0}")]
    DuplicatePhaseCode(String),

    #[error("Duplicate stadium name {0}")]
    DuplicateStadiumName(String),

    #[error("Unknown team code {0}")]
    UnknownTeam(String),

    #[error("Unknown stadium {0}")]
    UnknownStadium(String),

    #[error("Unknown phase code {0}")]
    UnknownPhase(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Inconsistent match {home} vs {away}: {source}")]
    InconsistentGame {
        home: String,
        away: String,
        source: LifecycleError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Deserialize)]
pub struct FixtureSet {
    #[serde(default)]
    pub phases: Vec<PhaseFixture>,
    #[serde(default)]
    pub stadiums: Vec<StadiumFixture>,
    #[serde(default)]
    pub teams: Vec<TeamFixture>,
    #[serde(default)]
    pub games: Vec<GameFixture>,
}

#[derive(Debug, Deserialize)]
pub struct PhaseFixture {
    pub name: String,
    pub code: String,
    pub order: i32,
}

#[derive(Debug, Deserialize)]
pub struct StadiumFixture {
    pub name: String,
    pub city: String,
    pub country: String,
    pub capacity: u32,
}

#[derive(Debug, Deserialize)]
pub struct TeamFixture {
    pub name: String,
    pub code: String,
    pub flag: Option<String>,
    pub group: GroupLabel,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameFixture {
    pub home: String,
    pub away: String,
    pub stadium: String,
    pub phase: String,
    pub kickoff: DateTime<Utc>,
    pub group: Option<GroupLabel>,
    pub status: GameStatus,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub phases: usize,
    pub stadiums: usize,
    pub teams: usize,
    pub games: usize,
}

impl FixtureSet {
    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Validate the whole set and insert it into `store`. Nothing is inserted
    /// when any entry is invalid.
    pub fn seed(self, store: &MemoryStore) -> Result<SeedSummary, FixtureError> {
        let validator = TournamentValidator::new();

        let mut phases: HashMap<String, Phase> = HashMap::new();
        for p in self.phases {
            let phase = Phase {
                id: Uuid::new_v4(),
                name: p.name,
                code: p.code.clone(),
                display_order: p.order,
            };
            if phases.insert(p.code.clone(), phase).is_some() {
                return Err(FixtureError::DuplicatePhaseCode(p.code));
            }
        }

        let mut stadiums: HashMap<String, Stadium> = HashMap::new();
        for s in self.stadiums {
            let stadium = Stadium {
                id: Uuid::new_v4(),
                name: s.name.clone(),
                city: s.city,
                country: s.country,
                capacity: s.capacity,
            };
            if stadiums.insert(s.name.clone(), stadium).is_some() {
                return Err(FixtureError::DuplicateStadiumName(s.name));
            }
        }

        let mut teams: HashMap<String, Team> = HashMap::new();
        for t in self.teams {
            let mut team = Team::new(t.name, t.code.clone(), t.group);
            team.flag = t.flag;
            validator.validate_team(&team)?;
            if teams.insert(t.code.clone(), team).is_some() {
                return Err(FixtureError::DuplicateTeamCode(t.code));
            }
        }

        let mut games = Vec::with_capacity(self.games.len());
        for g in self.games {
            let home = teams
                .get(&g.home)
                .ok_or_else(|| FixtureError::UnknownTeam(g.home.clone()))?;
            let away = teams
                .get(&g.away)
                .ok_or_else(|| FixtureError::UnknownTeam(g.away.clone()))?;
            let stadium = stadiums
                .get(&g.stadium)
                .ok_or_else(|| FixtureError::UnknownStadium(g.stadium.clone()))?;
            let phase = phases
                .get(&g.phase)
                .ok_or_else(|| FixtureError::UnknownPhase(g.phase.clone()))?;

            validator.validate_pairing(home, away, g.group)?;
            let state = validator
                .state_from_parts(g.status, g.home_score, g.away_score)
                .map_err(|source| FixtureError::InconsistentGame {
                    home: g.home.clone(),
                    away: g.away.clone(),
                    source,
                })?;

            games.push(Game {
                id: Uuid::new_v4(),
                home_team_id: home.id,
                away_team_id: away.id,
                stadium_id: stadium.id,
                phase_id: phase.id,
                kickoff: g.kickoff,
                group: g.group,
                state,
            });
        }

        let summary = SeedSummary {
            phases: phases.len(),
            stadiums: stadiums.len(),
            teams: teams.len(),
            games: games.len(),
        };

        for phase in phases.into_values() {
            store.insert_phase(phase)?;
        }
        for stadium in stadiums.into_values() {
            store.insert_stadium(stadium)?;
        }
        for team in teams.into_values() {
            store.insert_team(team)?;
        }
        for game in games {
            store.insert_game(game)?;
        }

        tracing::info!(
            "Seeded tournament store: {} phases, {} stadiums, {} teams, {} matches",
            summary.phases, summary.stadiums, summary.teams, summary.games
        );

        Ok(summary)
    }
}

/// Build a store from the fixture file at `path`
pub fn load_fixtures(path: &Path) -> Result<MemoryStore, FixtureError> {
    let store = MemoryStore::new();
    FixtureSet::from_path(path)?.seed(&store)?;
    Ok(store)
}
