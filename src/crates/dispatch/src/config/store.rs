//! In-memory view of `agents.yaml` and `tasks.yaml`

use super::loader::{load_yaml_file, named_entries, parse_yaml_str};
use super::types::{AgentConfig, TaskConfig};
use crate::error::Result;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

pub const AGENTS_FILE: &str = "agents.yaml";
pub const TASKS_FILE: &str = "tasks.yaml";

/// Agent and task definitions, read once and never mutated
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    agents: BTreeMap<String, AgentConfig>,
    tasks: BTreeMap<String, TaskConfig>,
}

impl ConfigStore {
    /// Load `agents.yaml` and `tasks.yaml` from `dir`
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let agents_path = dir.join(AGENTS_FILE);
        let tasks_path = dir.join(TASKS_FILE);

        let agents = named_entries(
            load_yaml_file(&agents_path)?,
            &agents_path.display().to_string(),
        )?;
        let tasks = named_entries(
            load_yaml_file(&tasks_path)?,
            &tasks_path.display().to_string(),
        )?;

        let store = Self::from_parts(agents, tasks)?;
        info!(
            config_dir = %dir.display(),
            agents = store.agents.len(),
            tasks = store.tasks.len(),
            "Loaded dispatch configuration"
        );
        Ok(store)
    }

    /// Build from YAML text, mostly for tests and embedding
    pub fn from_yaml_strs(agents_yaml: &str, tasks_yaml: &str) -> Result<Self> {
        let agents = named_entries(parse_yaml_str(agents_yaml, AGENTS_FILE)?, AGENTS_FILE)?;
        let tasks = named_entries(parse_yaml_str(tasks_yaml, TASKS_FILE)?, TASKS_FILE)?;
        Self::from_parts(agents, tasks)
    }

    /// Take ownership of parsed definitions; entry names come from the map keys
    pub fn from_parts(
        mut agents: BTreeMap<String, AgentConfig>,
        mut tasks: BTreeMap<String, TaskConfig>,
    ) -> Result<Self> {
        for (name, agent) in agents.iter_mut() {
            agent.name = name.clone();
        }
        for (name, task) in tasks.iter_mut() {
            task.name = name.clone();
        }

        let store = Self { agents, tasks };
        store.validate()?;
        Ok(store)
    }

    /// Reject bad retry settings; warn about dangling agent references
    pub fn validate(&self) -> Result<()> {
        for task in self.tasks.values() {
            task.retry_config.validate(&task.name)?;

            if let Some(agent) = &task.agent {
                if !self.agents.contains_key(agent) {
                    warn!(task = %task.name, agent = %agent, "Task references unknown agent");
                }
            }
        }
        Ok(())
    }

    pub fn task(&self, name: &str) -> Option<&TaskConfig> {
        self.tasks.get(name)
    }

    pub fn agent(&self, name: &str) -> Option<&AgentConfig> {
        self.agents.get(name)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &TaskConfig> {
        self.tasks.values()
    }

    pub fn agents(&self) -> impl Iterator<Item = &AgentConfig> {
        self.agents.values()
    }

    /// Capabilities of `agent`, or `None` when no such agent exists
    pub fn agent_capabilities(&self, agent: &str) -> Option<&[String]> {
        self.agents.get(agent).map(|a| a.capabilities.as_slice())
    }
}
