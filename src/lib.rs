use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use std::net::TcpListener;
use std::sync::Arc;
use actix_cors::Cors;

pub mod config;
mod routes;
pub mod handlers;
pub mod models;
mod middleware;
pub mod db;
pub mod errors;
pub mod services;
pub mod telemetry;
pub mod tournament;
use crate::routes::init_routes;
use crate::config::settings::{AdminSettings, CorsSettings, StandingsSettings};
use crate::db::store::TournamentStore;

pub fn run(
    listener: TcpListener,
    store: Arc<dyn TournamentStore>,
    admin_settings: AdminSettings,
    standings_settings: StandingsSettings,
    cors_settings: CorsSettings,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let store_data: web::Data<dyn TournamentStore> = web::Data::from(store);
    let admin_settings = web::Data::new(admin_settings);
    let standings_settings = web::Data::new(standings_settings);
    let allowed_origins = cors_settings.allowed_origins;

    let server = HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PATCH"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Get a pointer copy and attach it to the application state
            .app_data(store_data.clone())
            .app_data(admin_settings.clone())
            .app_data(standings_settings.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
