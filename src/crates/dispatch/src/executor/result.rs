//! Task execution outcome as returned to callers

use serde::{Deserialize, Serialize};

/// Successful provider output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskOutput {
    /// Trimmed text returned by the provider
    pub task_output: String,

    /// Provider that produced the output
    pub provider: String,

    /// Attempts used, including the successful one
    pub attempts: u32,
}

/// Outcome of `execute_task`
///
/// Serializes as `{"status":"success","task":..,"result":{..}}` or
/// `{"status":"error","task":..,"error":".."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExecutionResult {
    Success { task: String, result: TaskOutput },
    Error { task: String, error: String },
}

impl ExecutionResult {
    pub fn success(task: impl Into<String>, result: TaskOutput) -> Self {
        Self::Success {
            task: task.into(),
            result,
        }
    }

    pub fn error(task: impl Into<String>, error: impl ToString) -> Self {
        Self::Error {
            task: task.into(),
            error: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn task(&self) -> &str {
        match self {
            Self::Success { task, .. } | Self::Error { task, .. } => task,
        }
    }

    pub fn output(&self) -> Option<&TaskOutput> {
        match self {
            Self::Success { result, .. } => Some(result),
            Self::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error, .. } => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let result = ExecutionResult::success(
            "document_processing",
            TaskOutput {
                task_output: "Invoice".into(),
                provider: "groq".into(),
                attempts: 2,
            },
        );

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "status": "success",
                "task": "document_processing",
                "result": {"task_output": "Invoice", "provider": "groq", "attempts": 2}
            })
        );
        assert!(result.is_success());
        assert_eq!(result.output().unwrap().attempts, 2);
    }

    #[test]
    fn test_error_shape() {
        let result = ExecutionResult::error("ghost", "Task ghost not found");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"status": "error", "task": "ghost", "error": "Task ghost not found"})
        );
        assert_eq!(result.task(), "ghost");
        assert_eq!(result.error_message(), Some("Task ghost not found"));
        assert!(result.output().is_none());
    }

    #[test]
    fn test_deserialize() {
        let parsed: ExecutionResult =
            serde_json::from_str(r#"{"status":"error","task":"t","error":"boom"}"#).unwrap();
        assert_eq!(parsed, ExecutionResult::error("t", "boom"));
    }
}
