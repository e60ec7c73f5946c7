//! Error types for text-generation providers.

use thiserror::Error;

/// Result type for LLM operations.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur when working with LLM providers.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API authentication failed.
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Invalid response from provider.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Non-success status returned by the vendor API.
    #[error("{provider} API error {status}: {body}")]
    ProviderError {
        provider: String,
        status: u16,
        body: String,
    },

    /// Provider name not recognized or not registered.
    #[error("Unknown AI provider: {0}")]
    UnknownProvider(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<tooling::ToolingError> for LlmError {
    fn from(err: tooling::ToolingError) -> Self {
        LlmError::ConfigError(err.to_string())
    }
}
