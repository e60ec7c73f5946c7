//! OpenRouter client implementation.
//!
//! OpenRouter routes requests to many vendors behind one OpenAI-compatible
//! API. Model names carry the vendor prefix, e.g. `openai/gpt-3.5-turbo`.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::remote::OpenRouterClient;
//! use llm::config::RemoteLlmConfig;
//!
//! let config = RemoteLlmConfig::new(
//!     std::env::var("OPENROUTER_API_KEY")?,
//!     "https://openrouter.ai/api/v1",
//!     "openai/gpt-3.5-turbo"
//! );
//! let client = OpenRouterClient::new(config)?.with_app_name("dispatch");
//! ```

use super::{check_status, decode, http_client, CompletionRequest, CompletionResponse};
use crate::config::RemoteLlmConfig;
use crate::error::Result;
use crate::provider::TextProvider;
use async_trait::async_trait;
use reqwest::Client;

/// OpenRouter API client.
#[derive(Clone)]
pub struct OpenRouterClient {
    config: RemoteLlmConfig,
    client: Client,
    app_name: Option<String>,
}

impl OpenRouterClient {
    /// Create a new OpenRouter client with the given configuration.
    pub fn new(config: RemoteLlmConfig) -> Result<Self> {
        let client = http_client(config.timeout)?;
        Ok(Self {
            config,
            client,
            app_name: None,
        })
    }

    /// Set the application name for OpenRouter attribution.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }
}

#[async_trait]
impl TextProvider for OpenRouterClient {
    fn name(&self) -> &str {
        "openrouter"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate_text(&self, prompt: &str, max_tokens: usize) -> Result<String> {
        let url = self.config.endpoint("completions");
        tracing::debug!(provider = "openrouter", model = %self.config.model, "Requesting completion");

        let body = CompletionRequest {
            model: &self.config.model,
            prompt,
            max_tokens,
        };

        let mut req = self.client.post(&url).bearer_auth(&self.config.api_key).json(&body);
        if let Some(app_name) = &self.app_name {
            req = req.header("HTTP-Referer", app_name).header("X-Title", app_name);
        }

        let response = check_status("OpenRouter", req.send().await?).await?;
        decode::<CompletionResponse>(response).await?.first_text()
    }
}
