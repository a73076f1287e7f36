use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::store::{EventStore, StoreError};
use crate::models::{ChatExchange, Event};

/// Event store wrapper that caches the full-scan snapshot
///
/// Every nearby and chat request scans all events, so the snapshot is kept
/// in an in-process TTL cache. Writes through this wrapper invalidate it;
/// writes made elsewhere become visible once the TTL expires.
///
/// A snapshot loaded while a write was in flight is never kept: writes bump
/// `generation` after committing, and a load only keeps its result when the
/// generation is unchanged after the cache insert.
pub struct CachedEventStore {
    inner: Arc<dyn EventStore>,
    snapshot: moka::future::Cache<(), Arc<Vec<Event>>>,
    generation: AtomicU64,
}

impl CachedEventStore {
    pub fn new(inner: Arc<dyn EventStore>, ttl_secs: u64) -> Self {
        let snapshot = moka::future::CacheBuilder::new(1)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            inner,
            snapshot,
            generation: AtomicU64::new(0),
        }
    }

    /// Drop the cached snapshot
    pub async fn invalidate(&self) {
        self.snapshot.invalidate(&()).await;
        tracing::trace!("Event snapshot invalidated");
    }

    async fn after_write(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.invalidate().await;
    }
}

#[async_trait]
impl EventStore for CachedEventStore {
    async fn find_all(&self) -> Result<Vec<Event>, StoreError> {
        if let Some(events) = self.snapshot.get(&()).await {
            tracing::trace!("Event snapshot cache hit");
            return Ok(events.as_ref().clone());
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let events = self.inner.find_all().await?;

        if self.generation.load(Ordering::SeqCst) == generation {
            self.snapshot.insert((), Arc::new(events.clone())).await;
            // A write may have landed between the check and the insert
            if self.generation.load(Ordering::SeqCst) != generation {
                self.invalidate().await;
            }
        } else {
            tracing::trace!("Event snapshot raced a write, not caching it");
        }
        tracing::trace!("Event snapshot cache miss, loaded {} events", events.len());

        Ok(events)
    }

    async fn insert(&self, event: Event) -> Result<String, StoreError> {
        let id = self.inner.insert(event).await?;
        self.after_write().await;
        Ok(id)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.inner.delete_by_id(id).await?;
        self.after_write().await;
        Ok(())
    }

    async fn record_chat_exchange(&self, exchange: &ChatExchange) -> Result<(), StoreError> {
        self.inner.record_chat_exchange(exchange).await
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        self.inner.health_check().await
    }
}
