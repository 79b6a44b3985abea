use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::db::store::TournamentStore;
use crate::errors::ApiError;
use crate::models::common::DataResponse;

/// Phases in display order
#[tracing::instrument(name = "List phases", skip(store))]
pub async fn list_phases(store: web::Data<dyn TournamentStore>) -> Result<HttpResponse, ApiError> {
    let phases = store.phases()?;
    Ok(HttpResponse::Ok().json(DataResponse::list(phases)))
}

#[tracing::instrument(name = "Get phase", skip(store))]
pub async fn get_phase(
    phase_id: Uuid,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    let phase = store
        .phase(phase_id)?
        .ok_or_else(|| ApiError::not_found("Phase"))?;
    Ok(HttpResponse::Ok().json(DataResponse::single(phase)))
}
