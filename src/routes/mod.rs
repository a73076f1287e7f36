// Route exports
pub mod chat;
pub mod events;

use actix_web::{error, web, HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::core::Recommender;
use crate::models::ErrorResponse;
use crate::services::EventStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
    pub recommender: Recommender,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(events::configure)
            .configure(chat::configure),
    );
}

/// Build a JSON error body with a matching status
pub(crate) fn error_response(status: actix_web::http::StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let message = format!("Invalid JSON: {}", err);
    error::InternalError::from_response(
        err,
        error_response(actix_web::http::StatusCode::BAD_REQUEST, "invalid_json", message),
    )
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    let message = format!("Invalid query: {}", err);
    error::InternalError::from_response(
        err,
        error_response(actix_web::http::StatusCode::BAD_REQUEST, "invalid_query", message),
    )
    .into()
}
