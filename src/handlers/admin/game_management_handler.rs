use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::db::store::{GameFilter, TournamentStore};
use crate::errors::ApiError;
use crate::models::common::{ApiResponse, DataResponse, Pagination};
use crate::models::game::{Game, GameStatus};
use crate::services::{GameQueryService, MatchService};
use crate::tournament::validation::TournamentValidator;

pub const ADMIN_MAX_LIMIT: usize = 200;

#[derive(Debug, Deserialize)]
pub struct AdminGameListQuery {
    pub status: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// Body of score updates and (optionally) of finish requests
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub home_score: Option<Value>,
    pub away_score: Option<Value>,
}

impl ScoreRequest {
    /// Parse one side; `None` when the field is absent or null
    fn side(value: &Option<Value>) -> Result<Option<i64>, ApiError> {
        let validator = TournamentValidator::new();
        Ok(value
            .as_ref()
            .map(|v| validator.parse_score_value(v))
            .transpose()?)
    }

    pub fn scores(&self) -> Result<(Option<i64>, Option<i64>), ApiError> {
        Ok((Self::side(&self.home_score)?, Self::side(&self.away_score)?))
    }
}

fn render(store: &web::Data<dyn TournamentStore>, game: &Game, message: &str) -> Result<HttpResponse, ApiError> {
    let view = GameQueryService::new(store.clone().into_inner())
        .view(game)?
        .ok_or_else(|| ApiError::not_found("Match"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(message, view)))
}

/// GET /api/admin/matches - All matches, optionally filtered by status
#[tracing::instrument(name = "Admin list matches", skip(store))]
pub async fn list_matches(
    query: web::Query<AdminGameListQuery>,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<GameStatus>)
        .transpose()
        .map_err(ApiError::BadRequest)?;
    let filter = GameFilter {
        status,
        ..Default::default()
    };
    let pagination = Pagination::resolve(query.page, query.limit, ADMIN_MAX_LIMIT);

    let games = GameQueryService::new(store.clone().into_inner()).list(&filter)?;
    let (page, meta) = pagination.apply(games);
    Ok(HttpResponse::Ok().json(DataResponse::list_with(page, meta)))
}

/// POST /api/admin/matches/{id}/start - Kick off a scheduled match at 0-0
#[tracing::instrument(name = "Start match", skip(store))]
pub async fn start_match(
    game_id: Uuid,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    let game = MatchService::new(store.clone().into_inner()).start_match(game_id)?;
    render(&store, &game, "Match started")
}

/// PATCH /api/admin/matches/{id}/score - Replace the live score
#[tracing::instrument(name = "Update match score", skip(store))]
pub async fn update_score(
    game_id: Uuid,
    body: web::Json<ScoreRequest>,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    let (home_score, away_score) = match body.scores()? {
        (Some(home), Some(away)) => (home, away),
        _ => {
            return Err(ApiError::BadRequest(
                "homeScore and awayScore are required".to_string(),
            ))
        }
    };

    let game = MatchService::new(store.clone().into_inner())
        .update_score(game_id, home_score, away_score)?;
    render(&store, &game, "Score updated")
}

/// POST /api/admin/matches/{id}/finish - End a live match. The body is
/// optional; missing scores keep the current live value.
#[tracing::instrument(name = "Finish match", skip(body, store))]
pub async fn finish_match(
    game_id: Uuid,
    body: web::Bytes,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    let request: ScoreRequest = if body.iter().all(u8::is_ascii_whitespace) {
        ScoreRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))?
    };
    let (home_score, away_score) = request.scores()?;

    info!("Finishing match {} with requested score {:?} - {:?}", game_id, home_score, away_score);

    let game = MatchService::new(store.clone().into_inner())
        .finish_match(game_id, home_score, away_score)?;
    render(&store, &game, "Match finished")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_request_parsing() {
        let request: ScoreRequest = serde_json::from_value(json!({ "homeScore": 2, "awayScore": null })).unwrap();
        assert_eq!(request.scores().unwrap(), (Some(2), None));

        // Negative values pass parsing; the lifecycle rejects them after the status check
        let negative: ScoreRequest = serde_json::from_value(json!({ "homeScore": 1, "awayScore": -1 })).unwrap();
        assert_eq!(negative.scores().unwrap(), (Some(1), Some(-1)));

        let text: ScoreRequest = serde_json::from_value(json!({ "homeScore": "3", "awayScore": 0 })).unwrap();
        assert!(text.scores().is_err());
    }
}
