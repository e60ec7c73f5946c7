//! Task execution
//!
//! The executor resolves a task and its provider by name, then runs the task
//! body under the task's retry policy. The body checks that every required
//! API is registered before calling the provider, so an unregistered API
//! costs the full attempt budget. Unknown tasks and providers return
//! immediately.

pub mod prompt;
pub mod result;

pub use prompt::{build_prompt, render_template};
pub use result::{ExecutionResult, TaskOutput};

use crate::config::{ConfigStore, TaskConfig};
use crate::error::{DispatchError, Result};
use crate::tools::ToolRegistry;
use llm::{ProviderRegistry, TextProvider, DEFAULT_MAX_TOKENS};
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Arc;
use tooling::async_utils::retry::with_retry;
use tracing::{error, info, warn};

/// Request parameters, passed through to prompt rendering
pub type Params = Map<String, Value>;

/// Param naming the provider to use
pub const PROVIDER_PARAM: &str = "ai_provider";

/// Provider used when the request names none
pub const DEFAULT_PROVIDER: &str = "openai";

/// Runs configured tasks against registered providers
///
/// Cheap to clone; all state is shared and read-only after construction.
#[derive(Debug, Clone)]
pub struct TaskExecutor {
    config: Arc<ConfigStore>,
    providers: ProviderRegistry,
    tools: ToolRegistry,
    max_tokens: usize,
}

impl TaskExecutor {
    pub fn new(config: impl Into<Arc<ConfigStore>>, providers: ProviderRegistry, tools: ToolRegistry) -> Self {
        Self {
            config: config.into(),
            providers,
            tools,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Load configuration from `config_dir` and register providers and
    /// tools from the environment
    pub fn from_env<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config = ConfigStore::load_dir(config_dir)?;
        let providers = ProviderRegistry::from_env()?;
        let tools = ToolRegistry::from_env()?;

        if providers.is_empty() {
            warn!("No AI provider API keys set; every task will fail");
        }
        info!(
            providers = ?providers.names(),
            tools = ?tools.names(),
            "Task executor ready"
        );

        Ok(Self::new(config, providers, tools))
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Capabilities of an agent; empty for unknown agents
    pub fn get_agent_capabilities(&self, agent_name: &str) -> Vec<String> {
        match self.config.agent_capabilities(agent_name) {
            Some(capabilities) => capabilities.to_vec(),
            None => {
                warn!(agent = agent_name, "Agent {} not found", agent_name);
                Vec::new()
            }
        }
    }

    /// Execute a task, retrying failures of the task body per the task's policy
    ///
    /// Never fails; errors are reported in the returned result.
    pub async fn execute_task(&self, task_name: &str, params: &Params) -> ExecutionResult {
        let (task, provider) = match self.resolve(task_name, params) {
            Ok(resolved) => resolved,
            Err(err) => {
                error!(task = task_name, error = %err, "Task rejected");
                return ExecutionResult::error(task_name, err);
            }
        };

        let agent = task.agent.as_deref().and_then(|name| self.config.agent(name));
        let prompt = build_prompt(task, agent, params);
        let policy = task.retry_config.policy();
        let max_tokens = self.max_tokens;

        let provider = provider.as_ref();
        let prompt = prompt.as_str();
        let outcome = with_retry(&policy, &format!("task {}", task_name), move |_attempt| async move {
            self.check_required_apis(task)?;
            provider
                .generate_text(prompt, max_tokens)
                .await
                .map_err(DispatchError::from)
        })
        .await;

        let attempts = outcome.attempts;
        match outcome.result {
            Ok(text) => ExecutionResult::success(
                task_name,
                TaskOutput {
                    task_output: text,
                    provider: provider.name().to_string(),
                    attempts,
                },
            ),
            Err(err) => ExecutionResult::error(task_name, err),
        }
    }

    /// Look up the task and provider
    fn resolve(&self, task_name: &str, params: &Params) -> Result<(&TaskConfig, Arc<dyn TextProvider>)> {
        let task = self
            .config
            .task(task_name)
            .ok_or_else(|| DispatchError::TaskNotFound(task_name.to_string()))?;

        let provider = self.select_provider(params)?;
        Ok((task, provider))
    }

    /// Every required API must name a registered provider or tool
    pub fn check_required_apis(&self, task: &TaskConfig) -> Result<()> {
        for api in &task.required_apis {
            if !self.providers.contains(api) && !self.tools.contains(api) {
                return Err(DispatchError::MissingApi {
                    task: task.name.clone(),
                    api: api.clone(),
                });
            }
        }
        Ok(())
    }

    /// Provider named by the `ai_provider` param, default `openai`
    pub fn select_provider(&self, params: &Params) -> Result<Arc<dyn TextProvider>> {
        let name = match params.get(PROVIDER_PARAM) {
            None | Some(Value::Null) => DEFAULT_PROVIDER.to_string(),
            Some(Value::String(s)) => s.trim().to_lowercase(),
            Some(other) => return Err(DispatchError::UnknownProvider(other.to_string())),
        };

        self.providers
            .get(&name)
            .ok_or(DispatchError::UnknownProvider(name))
    }
}
