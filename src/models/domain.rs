use serde::{Deserialize, Serialize};

use crate::core::distance::GeoPoint;

/// A local event as held by the event store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub time: String,
    /// Venue name
    pub location: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub organizer: String,
    #[serde(default = "default_price")]
    pub price: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Event {
    /// The event's coordinates, if they form a valid point
    pub fn point(&self) -> Option<GeoPoint> {
        GeoPoint::new(self.latitude, self.longitude).ok()
    }
}

pub fn default_price() -> String {
    "Free".to_string()
}

/// An event annotated with its distance from a query point
///
/// Built per query and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceAnnotatedEvent {
    #[serde(flatten)]
    pub event: Event,
    /// Kilometers, rounded to two decimals
    pub distance: f64,
}

/// A free-text recommendation request
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    pub message: String,
    pub point: Option<GeoPoint>,
    pub preferences: Vec<String>,
}

/// Generated text plus the events surfaced alongside it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub response: String,
    pub recommended_events: Vec<DistanceAnnotatedEvent>,
}

/// Audit record of one chat query/response pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub id: String,
    pub user_message: String,
    pub bot_response: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub preferences: Vec<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Ids of the events returned with the response
    pub recommended_events: Vec<String>,
}

/// Tunables for the nearby and chat pipelines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationSettings {
    /// Radius used when ranking events for chat
    pub chat_radius_km: f64,
    /// Radius used by the nearby listing when the caller gives none
    pub nearby_default_radius_km: f64,
    /// Ranked events embedded in the prompt
    pub context_window: usize,
    /// Ranked events returned with the response
    pub returned_events: usize,
    pub generation_timeout: std::time::Duration,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            chat_radius_km: 15.0,
            nearby_default_radius_km: 10.0,
            context_window: 10,
            returned_events: 5,
            generation_timeout: std::time::Duration::from_secs(30),
        }
    }
}
