//! Third-party API tools
//!
//! A tool is registered under its name when the matching `*_API_KEY`
//! environment variable is set. Tasks list tools in `required_apis`.

pub mod api_tool;

pub use api_tool::{ApiTool, TOOL_TIMEOUT};

use crate::error::{DispatchError, Result};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Tool names and the environment variable holding each API key
pub const KNOWN_TOOLS: [(&str, &str); 7] = [
    ("true_people_search", "TRUE_PEOPLE_SEARCH_API_KEY"),
    ("bland_ai", "BLAND_AI_API_KEY"),
    ("openai", "OPENAI_API_KEY"),
    ("perplexity", "PERPLEXITY_API_KEY"),
    ("make", "MAKE_API_KEY"),
    ("google_gemini", "GOOGLE_GEMINI_API_KEY"),
    ("endato", "ENDATO_API_KEY"),
];

/// Registered tools keyed by lowercase name
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, ApiTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every known tool whose API key is set
    pub fn from_env() -> Result<Self> {
        let mut registry = Self::new();
        for (name, key_env) in KNOWN_TOOLS {
            match tooling::config::get_secret(key_env)? {
                Some(key) => {
                    registry.register(ApiTool::new(name, &key)?);
                    info!(tool = name, "Registered tool");
                }
                None => debug!(tool = name, "{} not set; tool disabled", key_env),
            }
        }
        Ok(registry)
    }

    pub fn register(&mut self, tool: ApiTool) -> &mut Self {
        self.tools.insert(tool.name().trim().to_lowercase(), tool);
        self
    }

    pub fn with(mut self, tool: ApiTool) -> Self {
        self.register(tool);
        self
    }

    /// Look up a tool, ignoring case
    pub fn get(&self, name: &str) -> Result<&ApiTool> {
        self.tools
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(&name.trim().to_lowercase())
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
