use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::{error_response, AppState};
use crate::core::{GeoPoint, RecommendationError};
use crate::models::{ChatRequest, RecommendationQuery};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat", web::post().to(chat));
}

/// Conversational recommendation endpoint
///
/// POST /api/chat
///
/// Request body:
/// ```json
/// {
///   "message": "string",
///   "latitude": 40.7589,
///   "longitude": -73.9851,
///   "preferences": ["music"]
/// }
/// ```
async fn chat(
    state: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let point = match GeoPoint::from_optional(req.latitude, req.longitude) {
        Ok(point) => point,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, "Invalid coordinate", e.to_string()),
    };

    let req = req.into_inner();
    let query = RecommendationQuery {
        message: req.message,
        point,
        preferences: req.preferences.unwrap_or_default(),
    };

    // Events only matter when there is a point to rank them against
    let events = if query.point.is_some() {
        match state.store.find_all().await {
            Ok(events) => events,
            Err(e) => {
                tracing::error!("Failed to load events for chat: {}", e);
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load events", e.to_string());
            }
        }
    } else {
        Vec::new()
    };

    match state.recommender.recommend(&query, events).await {
        Ok(recommendation) => HttpResponse::Ok().json(recommendation),
        Err(e @ RecommendationError::GenerationFailed(_)) => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, "Recommendation unavailable", e.to_string())
        }
    }
}
