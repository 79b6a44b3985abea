use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::db::store::TournamentStore;
use crate::errors::ApiError;
use crate::models::common::DataResponse;

#[tracing::instrument(name = "List stadiums", skip(store))]
pub async fn list_stadiums(store: web::Data<dyn TournamentStore>) -> Result<HttpResponse, ApiError> {
    let stadiums = store.stadiums()?;
    Ok(HttpResponse::Ok().json(DataResponse::list(stadiums)))
}

#[tracing::instrument(name = "Get stadium", skip(store))]
pub async fn get_stadium(
    stadium_id: Uuid,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    let stadium = store
        .stadium(stadium_id)?
        .ok_or_else(|| ApiError::not_found("Stadium"))?;
    Ok(HttpResponse::Ok().json(DataResponse::single(stadium)))
}
