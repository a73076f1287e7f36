// Core algorithm exports
pub mod distance;
pub mod prompt;
pub mod proximity;
pub mod recommender;

pub use distance::{haversine_distance, round_km, CoordinateError, GeoPoint};
pub use prompt::build_prompt;
pub use proximity::filter_and_rank_by_proximity;
pub use recommender::{Recommender, RecommendationError};
