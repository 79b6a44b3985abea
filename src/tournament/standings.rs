//! Group standings computation.
//!
//! Points: 3 for a win, 1 for a draw, 0 for a loss. Ranking key, in order:
//! points desc, goal difference desc, goals scored desc, team name asc.
//! Teams level on all four keep the order they had in the roster.

use serde::Deserialize;
use std::cmp::Reverse;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::common::MatchResult;
use crate::models::game::Game;
use crate::models::standings::StandingsRow;
use crate::models::team::Team;

/// How team names are compared for the last tie-break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameOrdering {
    /// Plain codepoint order, so "Écosse" sorts after "Zambie"
    #[default]
    Codepoint,
    /// Codepoint order of the lowercased names, so "brésil" sorts before "Chili"
    CaseInsensitive,
}

impl NameOrdering {
    fn sort_key(&self, name: &str) -> String {
        match self {
            NameOrdering::Codepoint => name.to_owned(),
            NameOrdering::CaseInsensitive => name.to_lowercase(),
        }
    }
}

/// Running totals for one team. Goals and points are summed in `u64` so any
/// sequence of valid `u32` scores fits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    played: u32,
    won: u32,
    drawn: u32,
    lost: u32,
    goals_for: u64,
    goals_against: u64,
    points: u64,
}

impl Tally {
    fn record(self, scored: u32, conceded: u32) -> Self {
        let result = MatchResult::from_scores(scored, conceded);
        Tally {
            played: self.played.saturating_add(1),
            won: self.won.saturating_add(u32::from(result == MatchResult::Win)),
            drawn: self.drawn.saturating_add(u32::from(result == MatchResult::Draw)),
            lost: self.lost.saturating_add(u32::from(result == MatchResult::Loss)),
            goals_for: self.goals_for.saturating_add(u64::from(scored)),
            goals_against: self.goals_against.saturating_add(u64::from(conceded)),
            points: self.points.saturating_add(u64::from(result.points())),
        }
    }

    fn goal_difference(&self) -> i64 {
        let scored = i64::try_from(self.goals_for).unwrap_or(i64::MAX);
        let conceded = i64::try_from(self.goals_against).unwrap_or(i64::MAX);
        scored.saturating_sub(conceded)
    }

    fn into_row(self, team: &Team) -> StandingsRow {
        StandingsRow {
            position: 0,
            team: team.summary(),
            played: self.played,
            won: self.won,
            drawn: self.drawn,
            lost: self.lost,
            goals_for: self.goals_for,
            goals_against: self.goals_against,
            goal_difference: self.goal_difference(),
            points: self.points,
        }
    }
}

/// Rank a group using codepoint name ordering
pub fn compute_standings(teams: &[Team], finished_games: &[Game]) -> Vec<StandingsRow> {
    compute_standings_with(teams, finished_games, NameOrdering::default())
}

/// Rank a group. Every roster team gets exactly one row.
///
/// Games are expected to be finished; the engine reads whatever score they
/// carry. Games naming a team outside the roster, or carrying no score, are
/// skipped.
pub fn compute_standings_with(
    teams: &[Team],
    finished_games: &[Game],
    ordering: NameOrdering,
) -> Vec<StandingsRow> {
    let roster: HashMap<Uuid, Tally> = teams
        .iter()
        .map(|team| (team.id, Tally::default()))
        .collect();

    let tallies = finished_games.iter().fold(roster, |mut tallies, game| {
        let Some((home_score, away_score)) = game.state.score() else {
            tracing::debug!("Skipping game {} without a score", game.id);
            return tallies;
        };

        if !tallies.contains_key(&game.home_team_id) || !tallies.contains_key(&game.away_team_id) {
            tracing::debug!(
                "Skipping game {}: team {} or {} is not in the group roster",
                game.id, game.home_team_id, game.away_team_id
            );
            return tallies;
        }

        if let Some(home) = tallies.get_mut(&game.home_team_id) {
            *home = home.record(home_score, away_score);
        }
        if let Some(away) = tallies.get_mut(&game.away_team_id) {
            *away = away.record(away_score, home_score);
        }
        tallies
    });

    let mut rows: Vec<StandingsRow> = teams
        .iter()
        .map(|team| {
            tallies
                .get(&team.id)
                .copied()
                .unwrap_or_default()
                .into_row(team)
        })
        .collect();

    // Stable: rows level on every key keep roster order
    rows.sort_by_cached_key(|row| {
        (
            Reverse(row.points),
            Reverse(row.goal_difference),
            Reverse(row.goals_for),
            ordering.sort_key(&row.team.name),
        )
    });

    for (index, row) in rows.iter_mut().enumerate() {
        row.position = index as u32 + 1;
    }

    rows
}
