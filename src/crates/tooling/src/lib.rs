//! Shared helpers for the dispatch workspace
//!
//! # Modules
//!
//! - `config` - Environment variable loading with typed parsing
//! - `async_utils` - Fixed-delay retry loop for async operations
//! - `logging` - Tracing subscriber setup and log redaction

pub mod async_utils;
pub mod config;
pub mod logging;

use thiserror::Error;

/// Errors that can occur in the tooling crate
#[derive(Debug, Error)]
pub enum ToolingError {
    /// An environment variable is present but unusable
    #[error("Invalid environment variable {key}: {reason}")]
    InvalidEnv { key: String, reason: String },

    /// Logging could not be initialized
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result type for tooling operations
pub type Result<T> = std::result::Result<T, ToolingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ToolingError::InvalidEnv {
            key: "PORT".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid environment variable PORT: not a number"
        );
    }
}
