use crate::core::distance::{haversine_distance, round_km, GeoPoint};
use crate::models::{DistanceAnnotatedEvent, Event};

/// Keep the events within `radius_km` of `point`, nearest first
///
/// The boundary is inclusive and is tested against the full-precision
/// distance; the annotation carries the distance rounded to two decimals.
/// Equal annotated distances keep their input order. Events whose stored
/// coordinates are not a valid point are skipped.
pub fn filter_and_rank_by_proximity(
    point: GeoPoint,
    events: impl IntoIterator<Item = Event>,
    radius_km: f64,
) -> Vec<DistanceAnnotatedEvent> {
    let mut nearby: Vec<DistanceAnnotatedEvent> = events
        .into_iter()
        .filter_map(|event| {
            let Some(event_point) = event.point() else {
                tracing::warn!(
                    "Skipping event {} with invalid coordinates ({}, {})",
                    event.id,
                    event.latitude,
                    event.longitude
                );
                return None;
            };

            let distance = haversine_distance(point, event_point);
            if distance <= radius_km {
                Some(DistanceAnnotatedEvent {
                    event,
                    distance: round_km(distance),
                })
            } else {
                None
            }
        })
        .collect();

    // sort_by is stable, so ties keep input order
    nearby.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    nearby
}
