// Unit tests for the proximity engine against the public API

use hyperlocal_events::core::{filter_and_rank_by_proximity, haversine_distance, GeoPoint};
use hyperlocal_events::models::Event;
use hyperlocal_events::services::sample_events;

fn point(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon).unwrap()
}

/// Deterministic scatter of events around midtown Manhattan
fn scattered_events(count: usize) -> Vec<Event> {
    let template = sample_events().remove(0);
    (0..count)
        .map(|i| {
            let step = i as f64;
            Event {
                id: format!("scatter-{}", i),
                latitude: 40.7589 + ((step * 7.3) % 31.0 - 15.0) * 0.01,
                longitude: -73.9851 + ((step * 3.7) % 29.0 - 14.0) * 0.01,
                ..template.clone()
            }
        })
        .collect()
}

#[test]
fn test_distance_identity_and_symmetry() {
    let points = [
        point(40.7589, -73.9851),
        point(51.5074, -0.1278),
        point(-33.8688, 151.2093),
        point(0.0, 0.0),
        point(89.9, 179.9),
    ];

    for a in points {
        assert_eq!(haversine_distance(a, a), 0.0);
        for b in points {
            let forward = haversine_distance(a, b);
            let backward = haversine_distance(b, a);
            assert!(forward >= 0.0);
            assert!((forward - backward).abs() < 1e-9, "{:?} <-> {:?}", a, b);
        }
    }
}

#[test]
fn test_distance_accuracy() {
    // Distance to LA (approximately 3944 km)
    let distance = haversine_distance(point(40.7128, -74.0060), point(34.0522, -118.2437));
    assert!((distance - 3944.0).abs() < 100.0, "Expected ~3944km, got {}", distance);

    let distance = haversine_distance(point(40.7589, -73.9851), point(40.7505, -73.9934));
    assert!((distance - 1.11).abs() < 0.05, "Expected ~1.11km, got {}", distance);
}

#[test]
fn test_ranked_output_is_sorted_and_within_radius() {
    let origin = point(40.7589, -73.9851);
    let events = scattered_events(200);

    for radius in [0.5, 2.0, 5.0, 10.0, 15.0, 25.0] {
        let ranked = filter_and_rank_by_proximity(origin, events.clone(), radius);

        for pair in ranked.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
        for e in &ranked {
            let exact = haversine_distance(origin, e.event.point().unwrap());
            assert!(exact <= radius);
        }
    }
}

#[test]
fn test_radius_monotonicity() {
    let origin = point(40.7589, -73.9851);
    let events = scattered_events(200);
    let radii = [1.0, 3.0, 8.0, 12.0, 30.0];

    for window in radii.windows(2) {
        let smaller = filter_and_rank_by_proximity(origin, events.clone(), window[0]);
        let larger = filter_and_rank_by_proximity(origin, events.clone(), window[1]);

        assert!(smaller.len() <= larger.len());
        for e in &smaller {
            assert!(
                larger.iter().any(|l| l.event.id == e.event.id),
                "{} missing at radius {}",
                e.event.id,
                window[1]
            );
        }
    }
}

#[test]
fn test_sample_events_within_chat_radius() {
    let ranked = filter_and_rank_by_proximity(point(40.7589, -73.9851), sample_events(), 15.0);

    assert_eq!(ranked.len(), 6);
    assert_eq!(ranked[0].event.title, "Downtown Jazz Night");
    assert_eq!(ranked[0].distance, 0.0);
}
