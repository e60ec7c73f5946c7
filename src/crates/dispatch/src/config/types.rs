//! Agent and task definitions as declared in YAML

use serde::{Deserialize, Serialize};
use tooling::async_utils::retry::RetryPolicy;

use crate::error::{DispatchError, Result};

/// Per-task retry policy
///
/// ```yaml
/// retry_config:
///   max_attempts: 3
///   delay_seconds: 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Attempts including the first one
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed pause between attempts; fractions allowed
    #[serde(default = "default_delay_seconds")]
    pub delay_seconds: f64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_delay_seconds() -> f64 {
    1.0
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_seconds: default_delay_seconds(),
        }
    }
}

impl RetryConfig {
    pub fn new(max_attempts: u32, delay_seconds: f64) -> Self {
        Self {
            max_attempts,
            delay_seconds,
        }
    }

    pub fn validate(&self, task: &str) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(DispatchError::InvalidConfig(format!(
                "task {}: retry_config.max_attempts must be at least 1",
                task
            )));
        }
        if !self.delay_seconds.is_finite() || self.delay_seconds < 0.0 {
            return Err(DispatchError::InvalidConfig(format!(
                "task {}: retry_config.delay_seconds must be a non-negative number (got {})",
                task, self.delay_seconds
            )));
        }
        Ok(())
    }

    /// Runtime retry policy for the executor
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::from_secs_f64(self.max_attempts, self.delay_seconds)
    }
}

/// A named unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Mapping key in `tasks.yaml`
    #[serde(default)]
    pub name: String,

    /// Prompt template; `{param}` placeholders are filled from request params
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub expected_output: Option<String>,

    /// Agent whose persona prefixes the prompt
    #[serde(default)]
    pub agent: Option<String>,

    /// Providers or tools that must be registered before the task may run
    #[serde(default)]
    pub required_apis: Vec<String>,

    #[serde(default)]
    pub retry_config: RetryConfig,
}

impl TaskConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            expected_output: None,
            agent: None,
            required_apis: Vec::new(),
            retry_config: RetryConfig::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A named persona owning a list of capabilities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Mapping key in `agents.yaml`
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub goal: Option<String>,

    #[serde(default)]
    pub capabilities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_retry_defaults() {
        let cfg: RetryConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, RetryConfig::new(3, 1.0));

        let cfg: RetryConfig = serde_yaml::from_str("max_attempts: 5").unwrap();
        assert_eq!(cfg.max_attempts, 5);
        assert_eq!(cfg.delay_seconds, 1.0);
    }

    #[test]
    fn test_retry_integer_delay() {
        let cfg: RetryConfig = serde_yaml::from_str("max_attempts: 2\ndelay_seconds: 5").unwrap();
        assert_eq!(cfg.policy().delay, Duration::from_secs(5));
        assert_eq!(cfg.policy().max_attempts, 2);
    }

    #[test]
    fn test_retry_validation() {
        assert!(RetryConfig::new(1, 0.0).validate("t").is_ok());
        assert!(RetryConfig::new(0, 1.0).validate("t").is_err());
        assert!(RetryConfig::new(3, -1.0).validate("t").is_err());
        assert!(RetryConfig::new(3, f64::INFINITY).validate("t").is_err());
    }

    #[test]
    fn test_task_minimal_yaml() {
        let task: TaskConfig = serde_yaml::from_str("required_apis: [openai]").unwrap();
        assert_eq!(task.required_apis, vec!["openai"]);
        assert_eq!(task.retry_config, RetryConfig::default());
        assert!(task.description.is_none());
    }

    #[test]
    fn test_agent_yaml() {
        let agent: AgentConfig = serde_yaml::from_str(
            "role: Skip Tracer\ncapabilities:\n  - people_search\n  - address_history\n",
        )
        .unwrap();
        assert_eq!(agent.role.as_deref(), Some("Skip Tracer"));
        assert_eq!(agent.capabilities, vec!["people_search", "address_history"]);
    }
}
