//! The provider abstraction and the set of supported vendors.

use crate::config::RemoteLlmConfig;
use crate::error::{LlmError, Result};
use crate::remote::{GroqClient, OpenAiClient, OpenRouterClient};
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Completion length used when nothing else is configured.
pub const DEFAULT_MAX_TOKENS: usize = 100;

const OPENAI_ORGANIZATION_ENV: &str = "OPENAI_ORGANIZATION";
const OPENROUTER_APP_NAME_ENV: &str = "OPENROUTER_APP_NAME";

/// A vendor-specific text-generation client.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Registry name of the provider (e.g. "openai").
    fn name(&self) -> &str;

    /// Model the provider sends requests to.
    fn model(&self) -> &str;

    /// Generate a completion for `prompt`, returning the trimmed text.
    async fn generate_text(&self, prompt: &str, max_tokens: usize) -> Result<String>;
}

/// Providers this crate ships a client for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenAi,
    Groq,
    OpenRouter,
}

impl ProviderKind {
    /// Every supported provider, in registration order.
    pub const ALL: [ProviderKind; 3] = [ProviderKind::OpenAi, ProviderKind::Groq, ProviderKind::OpenRouter];

    /// Registry name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Groq => "groq",
            ProviderKind::OpenRouter => "openrouter",
        }
    }

    /// Environment variable holding the API key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Groq => "GROQ_API_KEY",
            ProviderKind::OpenRouter => "OPENROUTER_API_KEY",
        }
    }

    /// Environment variable overriding the model.
    pub fn model_env(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_MODEL",
            ProviderKind::Groq => "GROQ_MODEL",
            ProviderKind::OpenRouter => "OPENROUTER_MODEL",
        }
    }

    /// Environment variable overriding the base URL.
    pub fn base_url_env(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_BASE_URL",
            ProviderKind::Groq => "GROQ_BASE_URL",
            ProviderKind::OpenRouter => "OPENROUTER_BASE_URL",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "https://api.openai.com/v1",
            ProviderKind::Groq => "https://api.groq.com/openai/v1",
            ProviderKind::OpenRouter => "https://openrouter.ai/api/v1",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-3.5-turbo-instruct",
            ProviderKind::Groq => "llama-3.1-70b-versatile",
            ProviderKind::OpenRouter => "openai/gpt-3.5-turbo",
        }
    }

    /// Read this provider's configuration from the environment.
    ///
    /// Returns `Ok(None)` when the API key is unset or blank.
    pub fn config_from_env(&self) -> Result<Option<RemoteLlmConfig>> {
        let Some(api_key) = tooling::config::get_secret(self.api_key_env())? else {
            return Ok(None);
        };
        let base_url = tooling::config::get_env_or(self.base_url_env(), self.default_base_url())?;
        let model = tooling::config::get_env_or(self.model_env(), self.default_model())?;

        Ok(Some(RemoteLlmConfig::new(api_key, base_url, model)))
    }

    /// Build the client for this provider.
    ///
    /// `OPENAI_ORGANIZATION` and `OPENROUTER_APP_NAME` are applied when set.
    pub fn build(&self, config: RemoteLlmConfig) -> Result<Arc<dyn TextProvider>> {
        Ok(match self {
            ProviderKind::OpenAi => {
                let client = OpenAiClient::new(config)?;
                match tooling::config::get_secret(OPENAI_ORGANIZATION_ENV)? {
                    Some(org) => Arc::new(client.with_organization(org)),
                    None => Arc::new(client),
                }
            }
            ProviderKind::Groq => Arc::new(GroqClient::new(config)?),
            ProviderKind::OpenRouter => {
                let client = OpenRouterClient::new(config)?;
                match tooling::config::get_secret(OPENROUTER_APP_NAME_ENV)? {
                    Some(app_name) => Arc::new(client.with_app_name(app_name)),
                    None => Arc::new(client),
                }
            }
        })
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "groq" => Ok(ProviderKind::Groq),
            "openrouter" => Ok(ProviderKind::OpenRouter),
            other => Err(LlmError::UnknownProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider_kind() {
        assert_eq!("openai".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!(" Groq ".parse::<ProviderKind>().unwrap(), ProviderKind::Groq);
        assert_eq!("OPENROUTER".parse::<ProviderKind>().unwrap(), ProviderKind::OpenRouter);

        let err = "anthropic".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(err, LlmError::UnknownProvider(name) if name == "anthropic"));
    }

    #[test]
    fn test_names_round_trip() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.as_str().parse::<ProviderKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_env_names() {
        assert_eq!(ProviderKind::OpenAi.api_key_env(), "OPENAI_API_KEY");
        assert_eq!(ProviderKind::Groq.api_key_env(), "GROQ_API_KEY");
        assert_eq!(ProviderKind::OpenRouter.api_key_env(), "OPENROUTER_API_KEY");
    }

    #[test]
    fn test_build_uses_config_model() {
        let config = RemoteLlmConfig::new("k", ProviderKind::Groq.default_base_url(), "mixtral-8x7b");
        let provider = ProviderKind::Groq.build(config).unwrap();
        assert_eq!(provider.name(), "groq");
        assert_eq!(provider.model(), "mixtral-8x7b");
    }
}
