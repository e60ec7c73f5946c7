//! Configuration loading from the process environment
//!
//! Every setting of the dispatch service that is not declared in YAML comes
//! from environment variables: API keys, bind address, config directory.
//! The helpers here give those lookups consistent error handling.
//!
//! # Example
//!
//! ```rust,ignore
//! use tooling::config::{get_env_or, get_env_parse_or, get_secret};
//!
//! let host = get_env_or("HOST", "0.0.0.0")?;
//! let port: u16 = get_env_parse_or("PORT", 8000)?;
//! let openai_key = get_secret("OPENAI_API_KEY")?;
//! ```

mod env;

pub use env::{get_env, get_env_or, get_env_parse, get_env_parse_or, get_secret};
