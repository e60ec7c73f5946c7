//! Groq client implementation.
//!
//! Groq serves open models behind an OpenAI-compatible chat completion API.
//! The prompt is sent as a single user message.

use super::{check_status, decode, http_client, ChatMessage, ChatRequest, ChatResponse};
use crate::config::RemoteLlmConfig;
use crate::error::Result;
use crate::provider::TextProvider;
use async_trait::async_trait;
use reqwest::Client;

/// Groq API client.
#[derive(Clone)]
pub struct GroqClient {
    config: RemoteLlmConfig,
    client: Client,
}

impl GroqClient {
    /// Create a new Groq client with the given configuration.
    pub fn new(config: RemoteLlmConfig) -> Result<Self> {
        let client = http_client(config.timeout)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl TextProvider for GroqClient {
    fn name(&self) -> &str {
        "groq"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate_text(&self, prompt: &str, max_tokens: usize) -> Result<String> {
        let url = self.config.endpoint("chat/completions");
        tracing::debug!(provider = "groq", model = %self.config.model, "Requesting chat completion");

        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let response = check_status("Groq", response).await?;
        decode::<ChatResponse>(response).await?.first_content()
    }
}
