use actix_web::{web, HttpResponse};

use crate::config::settings::StandingsSettings;
use crate::db::store::TournamentStore;
use crate::errors::ApiError;
use crate::models::common::{DataResponse, ListMeta};
use crate::models::group::GroupLabel;
use crate::services::StandingsService;

fn standings_service(
    store: &web::Data<dyn TournamentStore>,
    settings: &web::Data<StandingsSettings>,
) -> StandingsService {
    StandingsService::new(store.clone().into_inner(), settings.name_ordering)
}

/// Table of one group, recomputed from finished matches on every call
#[tracing::instrument(name = "Get group standings", skip(store, settings))]
pub async fn get_group_standings(
    group: String,
    store: web::Data<dyn TournamentStore>,
    settings: web::Data<StandingsSettings>,
) -> Result<HttpResponse, ApiError> {
    let group: GroupLabel = group.parse()?;
    let table = standings_service(&store, &settings).group_standings(group)?;

    let meta = ListMeta::total(table.standings.len()).with_group(group.to_string());
    Ok(HttpResponse::Ok().json(DataResponse::list_with(table.standings, meta)))
}

#[tracing::instrument(name = "Get all standings", skip(store, settings))]
pub async fn get_all_standings(
    store: web::Data<dyn TournamentStore>,
    settings: web::Data<StandingsSettings>,
) -> Result<HttpResponse, ApiError> {
    let tables = standings_service(&store, &settings).all_standings()?;
    Ok(HttpResponse::Ok().json(DataResponse::list(tables)))
}
