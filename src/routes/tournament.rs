// src/routes/tournament.rs
use actix_web::{get, web, HttpResponse};
use uuid::Uuid;

use crate::config::settings::StandingsSettings;
use crate::db::store::TournamentStore;
use crate::errors::ApiError;
use crate::handlers::tournament::{game_handler, phase_handler, stadium_handler, standings_handler, team_handler};
use crate::handlers::tournament::game_handler::GameListQuery;
use crate::handlers::tournament::team_handler::TeamListQuery;

/// List teams (optional `?group=`)
#[get("/teams")]
async fn list_teams(
    query: web::Query<TeamListQuery>,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    team_handler::list_teams(query, store).await
}

/// Teams of one group
#[get("/teams/group/{group}")]
async fn get_teams_by_group(
    path: web::Path<String>,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    team_handler::get_teams_by_group(path.into_inner(), store).await
}

/// Get specific team by ID
#[get("/teams/{team_id}")]
async fn get_team(
    path: web::Path<Uuid>,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    team_handler::get_team(path.into_inner(), store).await
}

#[get("/stadiums")]
async fn list_stadiums(store: web::Data<dyn TournamentStore>) -> Result<HttpResponse, ApiError> {
    stadium_handler::list_stadiums(store).await
}

#[get("/stadiums/{stadium_id}")]
async fn get_stadium(
    path: web::Path<Uuid>,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    stadium_handler::get_stadium(path.into_inner(), store).await
}

#[get("/phases")]
async fn list_phases(store: web::Data<dyn TournamentStore>) -> Result<HttpResponse, ApiError> {
    phase_handler::list_phases(store).await
}

#[get("/phases/{phase_id}")]
async fn get_phase(
    path: web::Path<Uuid>,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    phase_handler::get_phase(path.into_inner(), store).await
}

/// Filtered, paginated match list
#[get("/matches")]
async fn list_matches(
    query: web::Query<GameListQuery>,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    game_handler::list_games(query, store).await
}

/// Live matches (polled by spectators)
#[get("/matches/live")]
async fn get_live_matches(store: web::Data<dyn TournamentStore>) -> Result<HttpResponse, ApiError> {
    game_handler::get_live_games(store).await
}

#[get("/matches/today")]
async fn get_today_matches(store: web::Data<dyn TournamentStore>) -> Result<HttpResponse, ApiError> {
    game_handler::get_today_games(store).await
}

#[get("/matches/phase/{phase_code}")]
async fn get_matches_by_phase(
    path: web::Path<String>,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    game_handler::get_games_by_phase(path.into_inner(), store).await
}

/// Get specific match by ID
#[get("/matches/{game_id}")]
async fn get_match(
    path: web::Path<Uuid>,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    game_handler::get_game(path.into_inner(), store).await
}

/// Standings of every group
#[get("/standings")]
async fn get_all_standings(
    store: web::Data<dyn TournamentStore>,
    settings: web::Data<StandingsSettings>,
) -> Result<HttpResponse, ApiError> {
    standings_handler::get_all_standings(store, settings).await
}

/// Standings of one group (A to L)
#[get("/standings/{group}")]
async fn get_group_standings(
    path: web::Path<String>,
    store: web::Data<dyn TournamentStore>,
    settings: web::Data<StandingsSettings>,
) -> Result<HttpResponse, ApiError> {
    standings_handler::get_group_standings(path.into_inner(), store, settings).await
}
