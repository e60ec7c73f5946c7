//! Request and response bodies

use crate::executor::Params;
use serde::{Deserialize, Serialize};

/// Body of `POST /`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskRequest {
    #[serde(default)]
    pub task: Option<String>,

    /// Absent or `null` means no params
    #[serde(default)]
    pub params: Option<Params>,
}

impl TaskRequest {
    /// Task name, `None` when missing or blank
    pub fn task_name(&self) -> Option<&str> {
        self.task.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilitiesResponse {
    pub agent: String,
    pub capabilities: Vec<String>,
}
