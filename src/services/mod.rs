// Service exports
pub mod cache;
pub mod llm;
pub mod memory;
pub mod openai;
pub mod postgres;
pub mod seed;
pub mod store;

pub use cache::CachedEventStore;
pub use llm::{GenerationError, TextGenerator};
pub use memory::InMemoryEventStore;
pub use openai::OpenAiGenerator;
pub use postgres::PostgresEventStore;
pub use seed::{sample_events, seed_if_empty};
pub use store::{EventStore, StoreError};
