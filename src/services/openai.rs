use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::llm::{GenerationError, TextGenerator};

/// Client for an OpenAI-compatible chat completions API
pub struct OpenAiGenerator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiGenerator {
    /// Create a new generator
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        temperature: f32,
        request_timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(request_timeout).build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
            model,
            temperature,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, system_prompt: &str, user_message: &str) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            temperature: self.temperature,
            stream: false,
        };

        tracing::debug!("Requesting completion from {} (model {})", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GenerationError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::InvalidResponse("No content in completion choices".into()))
    }
}
