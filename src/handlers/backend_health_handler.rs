use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::db::store::TournamentStore;

/// `UP` while the tournament store answers reads, `DOWN` (503) otherwise
pub async fn backend_health_check(store: web::Data<dyn TournamentStore>) -> HttpResponse {
    match store.phases() {
        Ok(_) => HttpResponse::Ok().json(json!({ "status": "UP" })),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({ "status": "DOWN" }))
        }
    }
}
