use actix_web::web;

pub mod admin;
pub mod backend_health;
pub mod tournament;

use crate::routes::admin::init_admin_routes;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // Public read routes; fixed paths are registered before `{id}` ones
    cfg.service(
        web::scope("/api")
            .configure(init_admin_routes)
            .service(tournament::list_teams)
            .service(tournament::get_teams_by_group)
            .service(tournament::get_team)
            .service(tournament::list_stadiums)
            .service(tournament::get_stadium)
            .service(tournament::list_phases)
            .service(tournament::get_phase)
            .service(tournament::list_matches)
            .service(tournament::get_live_matches)
            .service(tournament::get_today_matches)
            .service(tournament::get_matches_by_phase)
            .service(tournament::get_match)
            .service(tournament::get_all_standings)
            .service(tournament::get_group_standings)
    );
}
