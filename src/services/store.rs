use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ChatExchange, Event};

/// Errors that can occur when interacting with the event store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Persistence failed: {0}")]
    PersistenceFailed(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// Keyed collection of events plus the chat audit log
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Point-in-time snapshot of every event, in insertion order
    async fn find_all(&self) -> Result<Vec<Event>, StoreError>;

    /// Store a new event and return its id
    async fn insert(&self, event: Event) -> Result<String, StoreError>;

    /// Remove an event, failing with `EventNotFound` when absent
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;

    /// Append a chat exchange to the audit log
    async fn record_chat_exchange(&self, exchange: &ChatExchange) -> Result<(), StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
