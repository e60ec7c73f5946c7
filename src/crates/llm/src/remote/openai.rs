//! OpenAI client implementation.
//!
//! Uses the text completion endpoint, which takes a bare prompt.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::remote::OpenAiClient;
//! use llm::config::RemoteLlmConfig;
//! use llm::TextProvider;
//!
//! let config = RemoteLlmConfig::new(
//!     std::env::var("OPENAI_API_KEY")?,
//!     "https://api.openai.com/v1",
//!     "gpt-3.5-turbo-instruct"
//! );
//! let client = OpenAiClient::new(config)?.with_organization("org-claims");
//! let text = client.generate_text("Hello!", 100).await?;
//! ```

use super::{check_status, decode, http_client, CompletionRequest, CompletionResponse};
use crate::config::RemoteLlmConfig;
use crate::error::Result;
use crate::provider::TextProvider;
use async_trait::async_trait;
use reqwest::Client;

/// OpenAI API client.
#[derive(Clone)]
pub struct OpenAiClient {
    config: RemoteLlmConfig,
    client: Client,
    organization: Option<String>,
}

impl OpenAiClient {
    /// Create a new OpenAI client with the given configuration.
    pub fn new(config: RemoteLlmConfig) -> Result<Self> {
        let client = http_client(config.timeout)?;
        Ok(Self {
            config,
            client,
            organization: None,
        })
    }

    /// Send requests on behalf of an OpenAI organization.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }
}

#[async_trait]
impl TextProvider for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate_text(&self, prompt: &str, max_tokens: usize) -> Result<String> {
        let url = self.config.endpoint("completions");
        tracing::debug!(provider = "openai", model = %self.config.model, "Requesting completion");

        let body = CompletionRequest {
            model: &self.config.model,
            prompt,
            max_tokens,
        };

        let mut req = self.client.post(&url).bearer_auth(&self.config.api_key).json(&body);
        if let Some(org) = &self.organization {
            req = req.header("OpenAI-Organization", org);
        }

        let response = check_status("OpenAI", req.send().await?).await?;
        decode::<CompletionResponse>(response).await?.first_text()
    }
}
