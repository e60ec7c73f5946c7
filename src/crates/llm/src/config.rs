//! Connection settings for remote providers.

use std::fmt;
use std::time::Duration;

/// Configuration for remote LLM providers.
#[derive(Clone)]
pub struct RemoteLlmConfig {
    /// API key, sent as a bearer token.
    pub api_key: String,

    /// Base URL for the API, without a trailing slash.
    ///
    /// Examples:
    /// - OpenAI: "https://api.openai.com/v1"
    /// - Groq: "https://api.groq.com/openai/v1"
    /// - OpenRouter: "https://openrouter.ai/api/v1"
    pub base_url: String,

    /// Model name/identifier.
    pub model: String,

    /// Request timeout duration.
    pub timeout: Duration,
}

impl RemoteLlmConfig {
    /// Create a new remote LLM configuration.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            timeout: default_timeout(),
        }
    }

    /// Join an endpoint path onto the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl fmt::Debug for RemoteLlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteLlmConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_base_url() {
        let config = RemoteLlmConfig::new("test-key", "https://api.openai.com/v1/", "gpt-3.5-turbo-instruct");

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-3.5-turbo-instruct");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = RemoteLlmConfig::new("sk-live-123", "https://openrouter.ai/api/v1", "m");
        let debug = format!("{:?}", config);
        assert!(debug.contains("openrouter.ai"));
        assert!(!debug.contains("sk-live-123"));
    }

    #[test]
    fn test_endpoint_join() {
        let config = RemoteLlmConfig::new("k", "https://api.groq.com/openai/v1", "m");
        assert_eq!(
            config.endpoint("/chat/completions"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(
            config.endpoint("completions"),
            "https://api.groq.com/openai/v1/completions"
        );
    }
}
