// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Event, DistanceAnnotatedEvent, RecommendationQuery, Recommendation, ChatExchange, RecommendationSettings};
pub use requests::{CreateEventRequest, NearbyQuery, ChatRequest};
pub use responses::{HealthResponse, ErrorResponse, CreateEventResponse, DeleteEventResponse};
