use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by a text-generation backend
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Generation timed out after {0:?}")]
    Timeout(Duration),
}

/// Single-turn text generation
///
/// No conversation state is kept between calls.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system_prompt: &str, user_message: &str) -> Result<String, GenerationError>;
}
