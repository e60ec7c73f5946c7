//! Task dispatch service
//!
//! Accepts a task name plus parameters, looks the task up in YAML
//! configuration, checks its required integrations and runs it against a
//! text-generation provider with a fixed-delay retry loop.
//!
//! # Example
//!
//! ```rust,ignore
//! use dispatch::{ConfigStore, TaskExecutor, ToolRegistry};
//! use llm::ProviderRegistry;
//!
//! let executor = TaskExecutor::new(
//!     ConfigStore::load_dir("config")?,
//!     ProviderRegistry::from_env()?,
//!     ToolRegistry::from_env()?,
//! );
//!
//! let params = serde_json::json!({"ai_provider": "groq", "document": "invoice.pdf"});
//! let result = executor
//!     .execute_task("document_processing", params.as_object().unwrap())
//!     .await;
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod server;
pub mod settings;
pub mod tools;

pub use config::{AgentConfig, ConfigStore, RetryConfig, TaskConfig};
pub use error::{DispatchError, Result};
pub use executor::{build_prompt, ExecutionResult, Params, TaskExecutor, TaskOutput};
pub use settings::ServerSettings;
pub use tools::{ApiTool, ToolRegistry};
