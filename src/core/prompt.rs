use crate::models::{DistanceAnnotatedEvent, RecommendationQuery};

const PREAMBLE: &str = "You are a helpful hyperlocal events assistant. \
Help users discover local events based on their location and preferences.";

const INSTRUCTIONS: &str = "Provide helpful, friendly responses about local events. \
If the user asks about events:
1. Recommend relevant events based on their preferences and location
2. Provide brief, engaging descriptions
3. Mention practical details like distance, date, and price
4. Ask follow-up questions to better understand their interests

If no location is provided, politely ask for their location to provide better recommendations.
Keep responses conversational and helpful.";

/// Render the system prompt for one recommendation request
///
/// Only a presence flag is emitted for the query point, never the raw
/// coordinates. Every event in `context` is rendered; truncation is the
/// caller's job.
pub fn build_prompt(query: &RecommendationQuery, context: &[DistanceAnnotatedEvent]) -> String {
    let location = if query.point.is_some() { "Provided" } else { "Not provided" };
    let preferences = if query.preferences.is_empty() {
        "Not specified".to_string()
    } else {
        query.preferences.join(", ")
    };

    let mut prompt = String::new();
    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\n");
    prompt.push_str(&format!("User's message: {}\n", query.message));
    prompt.push_str(&format!("User's location: {}\n", location));
    prompt.push_str(&format!("User's preferences: {}\n", preferences));
    prompt.push_str("\nAvailable nearby events:\n");

    for nearby in context {
        push_event(&mut prompt, nearby);
    }

    prompt.push('\n');
    prompt.push_str(INSTRUCTIONS);

    prompt
}

fn push_event(prompt: &mut String, nearby: &DistanceAnnotatedEvent) {
    let event = &nearby.event;
    prompt.push_str(&format!("- {} ({})\n", event.title, event.category));
    prompt.push_str(&format!("  Date: {} at {}\n", event.date, event.time));
    prompt.push_str(&format!("  Location: {} ({:.2}km away)\n", event.location, nearby.distance));
    prompt.push_str(&format!("  Description: {}\n", event.description));
    prompt.push_str(&format!("  Price: {}\n", event.price));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distance::GeoPoint;
    use crate::services::seed::sample_events;

    fn query(point: Option<GeoPoint>, preferences: &[&str]) -> RecommendationQuery {
        RecommendationQuery {
            message: "What's on this weekend?".to_string(),
            point,
            preferences: preferences.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_without_location_or_preferences() {
        let prompt = build_prompt(&query(None, &[]), &[]);

        assert!(prompt.contains("User's message: What's on this weekend?"));
        assert!(prompt.contains("User's location: Not provided"));
        assert!(prompt.contains("User's preferences: Not specified"));
        assert!(prompt.contains("Available nearby events:"));
        assert!(prompt.ends_with("Keep responses conversational and helpful."));
    }

    #[test]
    fn test_renders_event_blocks() {
        let point = GeoPoint::new(40.7589, -73.9851).unwrap();
        let mut event = sample_events().remove(1);
        event.price = "Free".to_string();
        let context = vec![DistanceAnnotatedEvent { event, distance: 1.1 }];

        let prompt = build_prompt(&query(Some(point), &["music", "food"]), &context);

        assert!(prompt.contains("User's location: Provided"));
        assert!(prompt.contains("User's preferences: music, food"));
        assert!(prompt.contains("- Community Farmers Market (Food & Drink)"));
        assert!(prompt.contains("  Date: 2025-01-26 at 9:00 AM"));
        assert!(prompt.contains("  Location: City Park (1.10km away)"));
        assert!(prompt.contains("  Description: Fresh local produce"));
        assert!(prompt.contains("  Price: Free"));
    }

    #[test]
    fn test_section_layout() {
        let prompt = build_prompt(&query(None, &["music"]), &[]);

        let expected = format!(
            "{}\n\nUser's message: What's on this weekend?\nUser's location: Not provided\n\
             User's preferences: music\n\nAvailable nearby events:\n\n{}",
            PREAMBLE, INSTRUCTIONS
        );
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_never_leaks_coordinates() {
        let point = GeoPoint::new(40.7589, -73.9851).unwrap();
        let prompt = build_prompt(&query(Some(point), &[]), &[]);

        assert!(!prompt.contains("40.7589"));
        assert!(!prompt.contains("-73.9851"));
    }
}
