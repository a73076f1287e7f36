//! Hyperlocal Events - location-aware event discovery service
//!
//! Ranks stored events by great-circle distance from a query point and
//! feeds the nearest ones to a text generator for conversational
//! recommendations.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_and_rank_by_proximity, haversine_distance, GeoPoint, Recommender};
pub use models::{Event, DistanceAnnotatedEvent, RecommendationQuery, Recommendation, ChatExchange, RecommendationSettings};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let point = GeoPoint::new(40.7128, -74.0060).unwrap();
        assert_eq!(haversine_distance(point, point), 0.0);
        assert_eq!(RecommendationSettings::default().context_window, 10);
    }
}
