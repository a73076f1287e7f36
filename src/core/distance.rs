use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Rejected coordinate input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("Invalid latitude {0}: must be a finite value within [-90, 90]")]
    InvalidLatitude(f64),

    #[error("Invalid longitude {0}: must be a finite value within [-180, 180]")]
    InvalidLongitude(f64),

    #[error("Latitude and longitude must be provided together")]
    IncompletePoint,
}

/// A validated (latitude, longitude) pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Build a point, rejecting non-finite or out-of-range coordinates.
    ///
    /// Values are never clamped into range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::InvalidLongitude(longitude));
        }

        Ok(Self { latitude, longitude })
    }

    /// Build a point from an optional pair; both halves or neither.
    pub fn from_optional(
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Option<Self>, CoordinateError> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Self::new(lat, lon).map(Some),
            (None, None) => Ok(None),
            _ => Err(CoordinateError::IncompletePoint),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Calculate the Haversine distance between two points in kilometers
///
/// Full precision; callers round for presentation.
#[inline]
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push h just past 1 near the antipode
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Round a distance to two decimal places
#[inline]
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}
