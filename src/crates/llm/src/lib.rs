//! Text-generation providers for the dispatch service.
//!
//! Every provider implements [`TextProvider`], a single
//! `generate_text(prompt, max_tokens)` call that passes the prompt through to
//! a vendor completion API and returns the trimmed text of the first choice.
//!
//! # Remote Providers
//!
//! - **OpenAI** - text completions (`/completions`)
//! - **Groq** - OpenAI-compatible chat completions
//! - **OpenRouter** - OpenAI-compatible text completions routed to many vendors
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use llm::{ProviderRegistry, TextProvider, DEFAULT_MAX_TOKENS};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Registers every provider whose API key is set
//!     let registry = ProviderRegistry::from_env()?;
//!
//!     let openai = registry.get("openai").ok_or("OPENAI_API_KEY not set")?;
//!     let text = openai
//!         .generate_text("Summarize this claim form", DEFAULT_MAX_TOKENS)
//!         .await?;
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Single client
//!
//! ```rust,ignore
//! use llm::remote::GroqClient;
//! use llm::config::RemoteLlmConfig;
//! use llm::TextProvider;
//!
//! let config = RemoteLlmConfig::new(
//!     std::env::var("GROQ_API_KEY")?,
//!     "https://api.groq.com/openai/v1",
//!     "llama-3.1-70b-versatile",
//! );
//! let client = GroqClient::new(config)?;
//! let answer = client.generate_text("Hello!", 100).await?;
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod registry;
pub mod remote;

pub use config::RemoteLlmConfig;
pub use error::{LlmError, Result};
pub use provider::{ProviderKind, TextProvider, DEFAULT_MAX_TOKENS};
pub use registry::ProviderRegistry;
