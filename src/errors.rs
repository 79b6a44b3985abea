use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error as ThisError;

use crate::db::store::StoreError;
use crate::models::common::ApiResponse;
use crate::models::group::InvalidGroupLabel;
use crate::tournament::lifecycle::LifecycleError;

/// Errors surfaced by the HTTP layer
#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error(transparent)]
    InvalidGroup(#[from] InvalidGroupLabel),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn not_found(entity: &'static str) -> Self {
        ApiError::NotFound { entity }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Lifecycle(_) | ApiError::InvalidGroup(_) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Lifecycle(LifecycleError::InvalidTransition { current, .. }) => {
                HttpResponse::build(self.status_code()).json(json!({
                    "success": false,
                    "message": self.to_string(),
                    "error": self.to_string(),
                    "currentStatus": current,
                }))
            }
            ApiError::Store(e) => {
                tracing::error!("Store failure: {}", e);
                HttpResponse::build(self.status_code())
                    .json(ApiResponse::<()>::error("Tournament data is temporarily unavailable"))
            }
            _ => HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(self.to_string())),
        }
    }
}
