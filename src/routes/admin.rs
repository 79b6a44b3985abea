use actix_web::web;

use crate::db::store::TournamentStore;
use crate::handlers::admin::game_management_handler;
use crate::middleware::admin::AdminMiddleware;

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            // Match management routes
            .service(
                web::resource("/matches")
                    .route(web::get().to(game_management_handler::list_matches))
            )
            .service(
                web::resource("/matches/{id}/start")
                    .route(web::post().to(
                        |path: web::Path<uuid::Uuid>, store: web::Data<dyn TournamentStore>| {
                            game_management_handler::start_match(path.into_inner(), store)
                        },
                    ))
            )
            .service(
                web::resource("/matches/{id}/score")
                    .route(web::patch().to(
                        |path: web::Path<uuid::Uuid>,
                         body: web::Json<game_management_handler::ScoreRequest>,
                         store: web::Data<dyn TournamentStore>| {
                            game_management_handler::update_score(path.into_inner(), body, store)
                        },
                    ))
            )
            .service(
                web::resource("/matches/{id}/finish")
                    .route(web::post().to(
                        |path: web::Path<uuid::Uuid>,
                         body: web::Bytes,
                         store: web::Data<dyn TournamentStore>| {
                            game_management_handler::finish_match(path.into_inner(), body, store)
                        },
                    ))
            )
    );
}
