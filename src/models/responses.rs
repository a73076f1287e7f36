use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Event creation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub message: String,
    pub id: String,
}

/// Event deletion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEventResponse {
    pub message: String,
}
