use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub address: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    pub organizer: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Query string for the nearby listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    #[validate(range(min = 0.0))]
    pub radius: Option<f64>,
}

/// Chat request body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    pub message: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub preferences: Option<Vec<String>>,
}
