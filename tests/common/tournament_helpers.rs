use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use worldcup_tracker::db::MemoryStore;
use worldcup_tracker::models::game::{Game, GameState};
use worldcup_tracker::models::group::GroupLabel;
use worldcup_tracker::models::phase::Phase;
use worldcup_tracker::models::stadium::Stadium;
use worldcup_tracker::models::team::Team;

pub fn group(label: &str) -> GroupLabel {
    label.parse().expect("Invalid group label in test")
}

pub fn kickoff(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, day, hour, 0, 0).unwrap()
}

pub fn team(name: &str, code: &str, group_label: &str) -> Team {
    Team::new(name, code, group(group_label))
}

pub fn stadium() -> Stadium {
    Stadium {
        id: Uuid::new_v4(),
        name: "MetLife Stadium".to_string(),
        city: "East Rutherford".to_string(),
        country: "USA".to_string(),
        capacity: 82500,
    }
}

pub fn phase(name: &str, code: &str, display_order: i32) -> Phase {
    Phase {
        id: Uuid::new_v4(),
        name: name.to_string(),
        code: code.to_string(),
        display_order,
    }
}

/// Game outside any store, for engine-level tests
pub fn game(home: &Team, away: &Team, state: GameState) -> Game {
    Game {
        id: Uuid::new_v4(),
        home_team_id: home.id,
        away_team_id: away.id,
        stadium_id: Uuid::new_v4(),
        phase_id: Uuid::new_v4(),
        kickoff: kickoff(15, 16),
        group: Some(home.group),
        state,
    }
}

pub fn finished(home: &Team, away: &Team, home_score: u32, away_score: u32) -> Game {
    game(home, away, GameState::Finished { home: home_score, away: away_score })
}

/// A seeded store: one stadium, the group and round-of-16 phases, and group
/// B with France, Germany and Brazil.
pub struct SeededTournament {
    pub stadium: Stadium,
    pub groups_phase: Phase,
    pub round16_phase: Phase,
    pub france: Team,
    pub germany: Team,
    pub brazil: Team,
}

impl SeededTournament {
    pub fn seed(store: &MemoryStore) -> Self {
        let tournament = SeededTournament {
            stadium: stadium(),
            groups_phase: phase("Phase de groupes", "groups", 1),
            round16_phase: phase("Huitièmes de finale", "round16", 2),
            france: team("France", "FRA", "B"),
            germany: team("Germany", "GER", "B"),
            brazil: team("Brazil", "BRA", "B"),
        };

        store.insert_stadium(tournament.stadium.clone()).unwrap();
        store.insert_phase(tournament.groups_phase.clone()).unwrap();
        store.insert_phase(tournament.round16_phase.clone()).unwrap();
        for team in [&tournament.france, &tournament.germany, &tournament.brazil] {
            store.insert_team(team.clone()).unwrap();
        }
        tournament
    }

    /// Insert a group B game and return it
    pub fn add_group_game(
        &self,
        store: &MemoryStore,
        home: &Team,
        away: &Team,
        kickoff: DateTime<Utc>,
        state: GameState,
    ) -> Game {
        let game = Game {
            id: Uuid::new_v4(),
            home_team_id: home.id,
            away_team_id: away.id,
            stadium_id: self.stadium.id,
            phase_id: self.groups_phase.id,
            kickoff,
            group: Some(group("B")),
            state,
        };
        store.insert_game(game.clone()).unwrap();
        game
    }

    pub fn add_knockout_game(
        &self,
        store: &MemoryStore,
        home: &Team,
        away: &Team,
        kickoff: DateTime<Utc>,
        state: GameState,
    ) -> Game {
        let game = Game {
            id: Uuid::new_v4(),
            home_team_id: home.id,
            away_team_id: away.id,
            stadium_id: self.stadium.id,
            phase_id: self.round16_phase.id,
            kickoff,
            group: None,
            state,
        };
        store.insert_game(game.clone()).unwrap();
        game
    }
}
