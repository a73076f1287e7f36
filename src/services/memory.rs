use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{EventStore, StoreError};
use crate::models::{ChatExchange, Event};

/// Process-local event store
///
/// Used for development runs without PostgreSQL and as the store in tests.
#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
    chats: RwLock<Vec<ChatExchange>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
            chats: RwLock::new(Vec::new()),
        }
    }

    /// Recorded chat exchanges, oldest first
    pub async fn chat_exchanges(&self) -> Vec<ChatExchange> {
        self.chats.read().await.clone()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn find_all(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.events.read().await.clone())
    }

    async fn insert(&self, event: Event) -> Result<String, StoreError> {
        let id = event.id.clone();
        self.events.write().await.push(event);
        tracing::debug!("Stored event {}", id);
        Ok(id)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut events = self.events.write().await;
        let position = events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| StoreError::EventNotFound(id.to_string()))?;
        events.remove(position);
        Ok(())
    }

    async fn record_chat_exchange(&self, exchange: &ChatExchange) -> Result<(), StoreError> {
        self.chats.write().await.push(exchange.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed::sample_events;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_insert_preserves_order() {
        let store = InMemoryEventStore::new();
        for event in sample_events() {
            assert_ok!(store.insert(event).await);
        }

        let titles: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        let expected: Vec<String> = sample_events().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, expected);
    }

    #[tokio::test]
    async fn test_delete_existing_and_missing() {
        let events = sample_events();
        let target = events[2].id.clone();
        let store = InMemoryEventStore::with_events(events);

        assert_ok!(store.delete_by_id(&target).await);
        assert_eq!(store.find_all().await.unwrap().len(), 5);

        let err = assert_err!(store.delete_by_id(&target).await);
        assert!(matches!(err, StoreError::EventNotFound(id) if id == target));
    }
}
