//! Remote LLM provider implementations.
//!
//! All three vendors speak the OpenAI wire format, so the request/response
//! types and status handling live here and the clients differ only in
//! endpoint, body shape and extra headers.
//!
//! # Providers
//!
//! - **OpenAI** - `/completions` with a `prompt`
//! - **Groq** - `/chat/completions` with a single user message
//! - **OpenRouter** - `/completions` with a `prompt`, plus attribution headers

pub mod groq;
pub mod openai;
pub mod openrouter;

pub use groq::GroqClient;
pub use openai::OpenAiClient;
pub use openrouter::OpenRouterClient;

use crate::error::{LlmError, Result};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Build the HTTP client shared by one provider instance.
pub(crate) fn http_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Map a non-success status to the matching error, passing success through.
pub(crate) async fn check_status(provider: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let body = tooling::logging::sanitize_for_logging(body.trim());
    tracing::warn!(provider, status = status.as_u16(), "Provider returned an error status");

    Err(match status {
        StatusCode::UNAUTHORIZED => LlmError::AuthenticationError(body),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded(body),
        _ => LlmError::ProviderError {
            provider: provider.to_string(),
            status: status.as_u16(),
            body,
        },
    })
}

/// Decode a JSON response body.
pub(crate) async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| LlmError::InvalidResponse(e.to_string()))
}

// Text completion API types
#[derive(Debug, Serialize)]
pub(crate) struct CompletionRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub max_tokens: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionChoice {
    #[serde(default)]
    pub text: String,
}

impl CompletionResponse {
    pub(crate) fn first_text(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.text.trim().to_string())
            .ok_or_else(|| LlmError::InvalidResponse("response contained no choices".to_string()))
    }
}

// Chat completion API types
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    pub(crate) fn first_content(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default().trim().to_string())
            .ok_or_else(|| LlmError::InvalidResponse("response contained no choices".to_string()))
    }
}
