use super::store::{EventStore, StoreError};
use crate::models::Event;

#[allow(clippy::too_many_arguments)]
fn sample(
    title: &str,
    description: &str,
    category: &str,
    date: &str,
    time: &str,
    location: &str,
    address: &str,
    (latitude, longitude): (f64, f64),
    organizer: &str,
    price: &str,
    image_url: &str,
) -> Event {
    Event {
        id: uuid::Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        address: address.to_string(),
        latitude,
        longitude,
        organizer: organizer.to_string(),
        price: price.to_string(),
        image_url: Some(image_url.to_string()),
        created_at: Some(chrono::Utc::now()),
    }
}

/// Demo events clustered around midtown Manhattan
pub fn sample_events() -> Vec<Event> {
    vec![
        sample(
            "Downtown Jazz Night",
            "Live jazz music featuring local artists in the heart of downtown",
            "Music",
            "2025-01-25",
            "7:00 PM",
            "Blue Note Cafe",
            "123 Main St, Downtown",
            (40.7589, -73.9851),
            "Blue Note Entertainment",
            "$15",
            "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f",
        ),
        sample(
            "Community Farmers Market",
            "Fresh local produce, artisanal foods, and handmade crafts",
            "Food & Drink",
            "2025-01-26",
            "9:00 AM",
            "City Park",
            "456 Park Ave, Riverside",
            (40.7505, -73.9934),
            "Riverside Community Association",
            "Free",
            "https://images.unsplash.com/photo-1488459716781-31db52582fe9",
        ),
        sample(
            "Tech Startup Networking",
            "Connect with local entrepreneurs and tech professionals",
            "Business & Networking",
            "2025-01-27",
            "6:30 PM",
            "Innovation Hub",
            "789 Tech Blvd, Silicon Valley",
            (40.7614, -73.9776),
            "TechConnect NYC",
            "$25",
            "https://images.unsplash.com/photo-1515169067868-5387ec356754",
        ),
        sample(
            "Morning Yoga in the Park",
            "Start your day with mindful movement and meditation",
            "Health & Wellness",
            "2025-01-28",
            "7:30 AM",
            "Sunset Park",
            "321 Sunset Dr, Westside",
            (40.7449, -73.9895),
            "Zen Wellness Studio",
            "$20",
            "https://images.unsplash.com/photo-1506629905189-51508327e5ce",
        ),
        sample(
            "Local Art Gallery Opening",
            "Featuring works by emerging local artists",
            "Arts & Culture",
            "2025-01-29",
            "6:00 PM",
            "Metropolitan Art Space",
            "654 Gallery St, Arts District",
            (40.7688, -73.9845),
            "Metro Arts Collective",
            "Free",
            "https://images.unsplash.com/photo-1460661419201-fd4cecdf8a8b",
        ),
        sample(
            "Family Fun Run",
            "3K fun run for families with kids activities",
            "Sports & Fitness",
            "2025-01-30",
            "8:00 AM",
            "Riverside Trail",
            "789 River Rd, Riverside",
            (40.7531, -73.9712),
            "Riverside Running Club",
            "$10",
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b",
        ),
    ]
}

/// Insert the sample events when the store holds none
///
/// Returns the number of events inserted.
pub async fn seed_if_empty(store: &dyn EventStore) -> Result<usize, StoreError> {
    if !store.find_all().await?.is_empty() {
        return Ok(0);
    }

    let events = sample_events();
    let count = events.len();
    for event in events {
        store.insert(event).await?;
    }

    tracing::info!("Seeded {} sample events", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryEventStore;

    #[tokio::test]
    async fn test_seeds_only_empty_store() {
        let store = InMemoryEventStore::new();

        assert_eq!(seed_if_empty(&store).await.unwrap(), 6);
        assert_eq!(seed_if_empty(&store).await.unwrap(), 0);
        assert_eq!(store.find_all().await.unwrap().len(), 6);
    }

    #[test]
    fn test_sample_events_have_valid_points() {
        for event in sample_events() {
            assert!(event.point().is_some(), "{} has invalid coordinates", event.title);
        }
    }
}
