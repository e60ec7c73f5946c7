//! Agent and task configuration
//!
//! Two YAML files describe everything the dispatcher can do:
//!
//! ```yaml
//! # agents.yaml
//! skip_tracer:
//!   role: Skip Tracer
//!   capabilities: [people_search, address_history]
//!
//! # tasks.yaml
//! skip_trace:
//!   description: Locate {name}, last seen at {last_known_address}.
//!   agent: skip_tracer
//!   required_apis: [openai]
//!   retry_config:
//!     max_attempts: 3
//!     delay_seconds: 5
//! ```

pub mod loader;
pub mod store;
pub mod types;

pub use store::{ConfigStore, AGENTS_FILE, TASKS_FILE};
pub use types::{AgentConfig, RetryConfig, TaskConfig};
