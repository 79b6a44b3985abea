use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::db::store::{GameFilter, StoreError, TournamentStore};
use crate::models::game::{Game, GameStatus};
use crate::models::group::GroupLabel;
use crate::models::phase::Phase;
use crate::models::stadium::Stadium;
use crate::models::team::Team;

#[derive(Debug, Default)]
struct Tables {
    teams: HashMap<Uuid, Team>,
    stadiums: HashMap<Uuid, Stadium>,
    phases: HashMap<Uuid, Phase>,
    games: HashMap<Uuid, Game>,
}

/// In-process tournament store. Writes take the lock, so the last writer wins
/// and every committed write is visible to the next read.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    pub fn insert_team(&self, team: Team) -> Result<(), StoreError> {
        self.write()?.teams.insert(team.id, team);
        Ok(())
    }

    pub fn insert_stadium(&self, stadium: Stadium) -> Result<(), StoreError> {
        self.write()?.stadiums.insert(stadium.id, stadium);
        Ok(())
    }

    pub fn insert_phase(&self, phase: Phase) -> Result<(), StoreError> {
        self.write()?.phases.insert(phase.id, phase);
        Ok(())
    }

    pub fn insert_game(&self, game: Game) -> Result<(), StoreError> {
        self.write()?.games.insert(game.id, game);
        Ok(())
    }

    fn sorted_games<'a>(games: impl Iterator<Item = &'a Game>) -> Vec<Game> {
        let mut games: Vec<Game> = games.cloned().collect();
        games.sort_by(|a, b| a.kickoff.cmp(&b.kickoff).then(a.id.cmp(&b.id)));
        games
    }
}

impl TournamentStore for MemoryStore {
    fn teams(&self) -> Result<Vec<Team>, StoreError> {
        let mut teams: Vec<Team> = self.read()?.teams.values().cloned().collect();
        teams.sort_by(|a, b| a.group.cmp(&b.group).then_with(|| a.name.cmp(&b.name)));
        Ok(teams)
    }

    fn team(&self, id: Uuid) -> Result<Option<Team>, StoreError> {
        Ok(self.read()?.teams.get(&id).cloned())
    }

    fn teams_in_group(&self, group: GroupLabel) -> Result<Vec<Team>, StoreError> {
        let mut teams: Vec<Team> = self
            .read()?
            .teams
            .values()
            .filter(|team| team.group == group)
            .cloned()
            .collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(teams)
    }

    fn stadiums(&self) -> Result<Vec<Stadium>, StoreError> {
        let mut stadiums: Vec<Stadium> = self.read()?.stadiums.values().cloned().collect();
        stadiums.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(stadiums)
    }

    fn stadium(&self, id: Uuid) -> Result<Option<Stadium>, StoreError> {
        Ok(self.read()?.stadiums.get(&id).cloned())
    }

    fn phases(&self) -> Result<Vec<Phase>, StoreError> {
        let mut phases: Vec<Phase> = self.read()?.phases.values().cloned().collect();
        phases.sort_by_key(|phase| phase.display_order);
        Ok(phases)
    }

    fn phase(&self, id: Uuid) -> Result<Option<Phase>, StoreError> {
        Ok(self.read()?.phases.get(&id).cloned())
    }

    fn phase_by_code(&self, code: &str) -> Result<Option<Phase>, StoreError> {
        Ok(self
            .read()?
            .phases
            .values()
            .find(|phase| phase.code == code)
            .cloned())
    }

    fn games(&self, filter: &GameFilter) -> Result<Vec<Game>, StoreError> {
        let phase_id = match &filter.phase_code {
            Some(code) => match self.phase_by_code(code)? {
                Some(phase) => Some(phase.id),
                // Unknown phase code matches nothing
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let tables = self.read()?;
        Ok(Self::sorted_games(tables.games.values().filter(|game| {
            phase_id.map_or(true, |id| game.phase_id == id) && filter.matches(game)
        })))
    }

    fn game(&self, id: Uuid) -> Result<Option<Game>, StoreError> {
        Ok(self.read()?.games.get(&id).cloned())
    }

    fn finished_games_in_group(&self, group: GroupLabel) -> Result<Vec<Game>, StoreError> {
        let tables = self.read()?;
        Ok(Self::sorted_games(tables.games.values().filter(|game| {
            game.group == Some(group) && game.status() == GameStatus::Finished
        })))
    }

    fn save_game(&self, game: &Game) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        match tables.games.get_mut(&game.id) {
            Some(stored) => {
                *stored = game.clone();
                Ok(())
            }
            None => Err(StoreError::UnknownGame(game.id)),
        }
    }
}
