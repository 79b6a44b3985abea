use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::store::TournamentStore;
use crate::errors::ApiError;
use crate::models::common::{DataResponse, ListMeta};
use crate::models::group::GroupLabel;

#[derive(Debug, Deserialize)]
pub struct TeamListQuery {
    pub group: Option<String>,
}

/// List all teams, optionally restricted to one group
#[tracing::instrument(name = "List teams", skip(store))]
pub async fn list_teams(
    query: web::Query<TeamListQuery>,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    match &query.group {
        Some(group) => teams_of_group(group, store.get_ref()),
        None => {
            let teams = store.teams()?;
            Ok(HttpResponse::Ok().json(DataResponse::list(teams)))
        }
    }
}

/// Get one team
#[tracing::instrument(name = "Get team", skip(store))]
pub async fn get_team(
    team_id: Uuid,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    let team = store.team(team_id)?.ok_or_else(|| ApiError::not_found("Team"))?;
    Ok(HttpResponse::Ok().json(DataResponse::single(team)))
}

/// Teams of one group, ordered by name
#[tracing::instrument(name = "Get teams by group", skip(store))]
pub async fn get_teams_by_group(
    group: String,
    store: web::Data<dyn TournamentStore>,
) -> Result<HttpResponse, ApiError> {
    teams_of_group(&group, store.get_ref())
}

fn teams_of_group(group: &str, store: &dyn TournamentStore) -> Result<HttpResponse, ApiError> {
    let group: GroupLabel = group.parse()?;
    let teams = store.teams_in_group(group)?;
    let meta = ListMeta::total(teams.len()).with_group(group.to_string());
    Ok(HttpResponse::Ok().json(DataResponse::list_with(teams, meta)))
}
