use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::store::{GameFilter, TournamentStore};
use crate::errors::ApiError;
use crate::models::common::{DataResponse, ListMeta, Pagination};
use crate::models::game::GameStatus;
use crate::models::group::GroupLabel;
use crate::services::GameQueryService;

pub const PUBLIC_MAX_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct GameListQuery {
    pub phase: Option<String>,
    pub group: Option<String>,
    pub status: Option<String>,
    /// `YYYY-MM-DD`, UTC
    pub date: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl GameListQuery {
    pub fn to_filter(&self) -> Result<GameFilter, ApiError> {
        let group = self
            .group
            .as_deref()
            .map(str::parse::<GroupLabel>)
            .transpose()?;
        let status = self
            .status
            .as_deref()
            .map(str::parse::<GameStatus>)
            .transpose()
            .map_err(ApiError::BadRequest)?;
        let date = self
            .date
            .as_deref()
            .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d"))
            .transpose()
            .map_err(|e| ApiError::BadRequest(format!("Invalid date, expected YYYY-MM-DD: {}", e)))?;

        Ok(GameFilter {
            phase_code: self.phase.clone(),
            group,
            status,
            date,
        })
    }
}

fn games_service(store: &web::Data<dyn TournamentStore>) -> GameQueryService {
    GameQueryService::new(store.clone().into_inner())
}

/// Filtered, paginated match list
#[tracing::instrument(name = "List matches", skip(store))]
pub async fn list_games(
    query: web::Query<GameListQuery>,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    let filter = query.to_filter()?;
    let pagination = Pagination::resolve(query.page, query.limit, PUBLIC_MAX_LIMIT);

    let games = games_service(&store).list(&filter)?;
    let (page, meta) = pagination.apply(games);
    Ok(HttpResponse::Ok().json(DataResponse::list_with(page, meta)))
}

#[tracing::instrument(name = "Get match", skip(store))]
pub async fn get_game(
    game_id: Uuid,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    let game = games_service(&store).get(game_id)?;
    Ok(HttpResponse::Ok().json(DataResponse::single(game)))
}

/// All matches of a phase, e.g. `round16`
#[tracing::instrument(name = "Get matches by phase", skip(store))]
pub async fn get_games_by_phase(
    phase_code: String,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    let games = games_service(&store).list(&GameFilter::with_phase(phase_code.clone()))?;
    let meta = ListMeta::total(games.len()).with_phase(phase_code);
    Ok(HttpResponse::Ok().json(DataResponse::list_with(games, meta)))
}

/// Matches currently in play; polled by the live banner
#[tracing::instrument(name = "Get live matches", skip(store))]
pub async fn get_live_games(store: web::Data<dyn TournamentStore>) -> Result<HttpResponse, ApiError> {
    let games = games_service(&store).list(&GameFilter::with_status(GameStatus::Live))?;
    Ok(HttpResponse::Ok().json(DataResponse::list(games)))
}

/// Matches kicking off today (UTC)
#[tracing::instrument(name = "Get today's matches", skip(store))]
pub async fn get_today_games(store: web::Data<dyn TournamentStore>) -> Result<HttpResponse, ApiError> {
    let today = Utc::now().date_naive();
    let games = games_service(&store).list(&GameFilter::with_date(today))?;
    let meta = ListMeta::total(games.len()).with_date(today.format("%Y-%m-%d").to_string());
    Ok(HttpResponse::Ok().json(DataResponse::list_with(games, meta)))
}
