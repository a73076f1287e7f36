use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::{error_response, AppState};
use crate::core::{filter_and_rank_by_proximity, GeoPoint};
use crate::models::{
    CreateEventRequest, CreateEventResponse, DeleteEventResponse, Event, HealthResponse, NearbyQuery,
};
use crate::services::StoreError;

/// Configure all event-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/events", web::get().to(list_events))
        .route("/events", web::post().to(create_event))
        .route("/events/nearby", web::get().to(nearby_events))
        .route("/events/{event_id}", web::delete().to(delete_event));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        service: "hyperlocal-events-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List every event
///
/// GET /api/events
async fn list_events(state: web::Data<AppState>) -> impl Responder {
    match state.store.find_all().await {
        Ok(events) => HttpResponse::Ok().json(events),
        Err(e) => {
            tracing::error!("Failed to list events: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to list events", e.to_string())
        }
    }
}

/// Events near a point, nearest first
///
/// GET /api/events/nearby?lat={lat}&lng={lng}&radius={km}
async fn nearby_events(
    state: web::Data<AppState>,
    query: web::Query<NearbyQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let point = match GeoPoint::new(query.lat, query.lng) {
        Ok(point) => point,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, "Invalid coordinate", e.to_string()),
    };

    let radius_km = query
        .radius
        .unwrap_or(state.recommender.settings().nearby_default_radius_km);
    if !radius_km.is_finite() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Validation failed",
            "radius must be a finite number of kilometers".to_string(),
        );
    }

    let events = match state.store.find_all().await {
        Ok(events) => events,
        Err(e) => {
            tracing::error!("Failed to load events for nearby query: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load events", e.to_string());
        }
    };

    let total = events.len();
    let nearby = filter_and_rank_by_proximity(point, events, radius_km);

    tracing::debug!("{} of {} events within {}km", nearby.len(), total, radius_km);

    HttpResponse::Ok().json(nearby)
}

/// Create an event
///
/// POST /api/events
async fn create_event(
    state: web::Data<AppState>,
    req: web::Json<CreateEventRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    if let Err(e) = GeoPoint::new(req.latitude, req.longitude) {
        return error_response(StatusCode::BAD_REQUEST, "Invalid coordinate", e.to_string());
    }

    let req = req.into_inner();
    let event = Event {
        id: uuid::Uuid::new_v4().to_string(),
        title: req.title,
        description: req.description,
        category: req.category,
        date: req.date,
        time: req.time,
        location: req.location,
        address: req.address,
        latitude: req.latitude,
        longitude: req.longitude,
        organizer: req.organizer,
        price: req.price.unwrap_or_else(crate::models::domain::default_price),
        image_url: req.image_url,
        created_at: Some(chrono::Utc::now()),
    };

    match state.store.insert(event).await {
        Ok(id) => {
            tracing::info!("Created event {}", id);
            HttpResponse::Ok().json(CreateEventResponse {
                message: "Event created successfully".to_string(),
                id,
            })
        }
        Err(e) => {
            tracing::error!("Failed to create event: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create event", e.to_string())
        }
    }
}

/// Delete an event
///
/// DELETE /api/events/{event_id}
async fn delete_event(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let event_id = path.into_inner();

    match state.store.delete_by_id(&event_id).await {
        Ok(()) => {
            tracing::info!("Deleted event {}", event_id);
            HttpResponse::Ok().json(DeleteEventResponse {
                message: "Event deleted successfully".to_string(),
            })
        }
        Err(e @ StoreError::EventNotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "Event not found", e.to_string())
        }
        Err(e) => {
            tracing::error!("Failed to delete event {}: {}", event_id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete event", e.to_string())
        }
    }
}
