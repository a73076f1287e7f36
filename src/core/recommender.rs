use std::sync::Arc;
use thiserror::Error;

use crate::core::{prompt::build_prompt, proximity::filter_and_rank_by_proximity};
use crate::models::{ChatExchange, Event, Recommendation, RecommendationQuery, RecommendationSettings};
use crate::services::{EventStore, GenerationError, TextGenerator};

/// Errors surfaced by the recommendation pipeline
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("Recommendation unavailable: {0}")]
    GenerationFailed(#[from] GenerationError),
}

/// Proximity-ranked recommendation pipeline
///
/// # Pipeline Stages
/// 1. Rank events within the chat radius of the query point
/// 2. Cut the context window and the returned window
/// 3. Render the prompt and call the text generator under a timeout
/// 4. Record the exchange in the audit log (best effort)
#[derive(Clone)]
pub struct Recommender {
    generator: Arc<dyn TextGenerator>,
    audit_log: Arc<dyn EventStore>,
    settings: RecommendationSettings,
}

impl Recommender {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        audit_log: Arc<dyn EventStore>,
        settings: RecommendationSettings,
    ) -> Self {
        Self {
            generator,
            audit_log,
            settings,
        }
    }

    pub fn settings(&self) -> &RecommendationSettings {
        &self.settings
    }

    /// Produce a recommendation for `query` from a snapshot of all events
    pub async fn recommend(
        &self,
        query: &RecommendationQuery,
        all_events: Vec<Event>,
    ) -> Result<Recommendation, RecommendationError> {
        let mut ranked = match query.point {
            Some(point) => filter_and_rank_by_proximity(point, all_events, self.settings.chat_radius_km),
            None => Vec::new(),
        };

        let context_len = ranked.len().min(self.settings.context_window);
        let prompt = build_prompt(query, &ranked[..context_len]);

        tracing::debug!(
            "Built prompt with {} of {} ranked events ({} chars)",
            context_len,
            ranked.len(),
            prompt.len()
        );

        let timeout = self.settings.generation_timeout;
        let response = match tokio::time::timeout(timeout, self.generator.generate(&prompt, &query.message)).await {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                tracing::error!("Text generation failed: {}", e);
                return Err(e.into());
            }
            Err(_) => {
                tracing::error!("Text generation timed out after {:?}", timeout);
                return Err(GenerationError::Timeout(timeout).into());
            }
        };

        ranked.truncate(self.settings.returned_events);

        let exchange = ChatExchange {
            id: uuid::Uuid::new_v4().to_string(),
            user_message: query.message.clone(),
            bot_response: response.clone(),
            latitude: query.point.map(|p| p.latitude()),
            longitude: query.point.map(|p| p.longitude()),
            preferences: query.preferences.clone(),
            timestamp: chrono::Utc::now(),
            recommended_events: ranked.iter().map(|e| e.event.id.clone()).collect(),
        };

        // Audit only: the caller still gets the response
        if let Err(e) = self.audit_log.record_chat_exchange(&exchange).await {
            tracing::warn!("Failed to record chat exchange {}: {}", exchange.id, e);
        }

        tracing::info!(
            "Recommendation ready with {} events (exchange {})",
            ranked.len(),
            exchange.id
        );

        Ok(Recommendation {
            response,
            recommended_events: ranked,
        })
    }
}
