//! Error types for task dispatch
//!
//! Everything that can go wrong between reading the YAML configuration and
//! returning a task result. The executor folds these into the `error` field
//! of an `ExecutionResult`; the HTTP layer never sees them directly.

use llm::LlmError;
use thiserror::Error;
use tooling::ToolingError;

/// Result type alias for dispatch operations
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Main error type for dispatch operations
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A configuration file does not exist
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// A configuration file exists but could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid YAML for its schema
    #[error("Error parsing YAML configuration {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Configuration parsed but violates a constraint
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No task with this name is configured
    #[error("Task {0} not found")]
    TaskNotFound(String),

    /// The requested provider is not registered
    #[error("Unknown AI provider: {0}")]
    UnknownProvider(String),

    /// A task lists an API that is neither a provider nor a tool
    #[error("Required API {api} not initialized")]
    MissingApi { task: String, api: String },

    /// The provider call failed
    #[error(transparent)]
    Provider(#[from] LlmError),

    /// No tool with this name is registered
    #[error("Tool {0} not registered")]
    UnknownTool(String),

    /// A tool request could not be sent or timed out
    #[error("Request to {url} failed: {message}")]
    ToolRequest { url: String, message: String },

    /// A tool request returned a non-success status
    #[error("Request to {url} returned {status}: {body}")]
    ToolStatus { url: String, status: u16, body: String },

    /// A tool response was not valid JSON
    #[error("Invalid JSON response from {url}: {message}")]
    ToolResponse { url: String, message: String },

    /// Environment-derived setting is invalid
    #[error(transparent)]
    Tooling(#[from] ToolingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DispatchError::TaskNotFound("skip_trace".into()).to_string(),
            "Task skip_trace not found"
        );
        assert_eq!(
            DispatchError::MissingApi {
                task: "skip_trace".into(),
                api: "Endato".into()
            }
            .to_string(),
            "Required API Endato not initialized"
        );
    }

    #[test]
    fn test_provider_error_is_transparent() {
        let err: DispatchError = LlmError::RateLimitExceeded("slow down".into()).into();
        assert_eq!(err.to_string(), "Rate limit exceeded: slow down");
    }
}
