//! Loads the repository's shipped configuration

use dispatch::{build_prompt, ConfigStore, Params};
use serde_json::{json, Value};
use std::path::PathBuf;

fn repo_config_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../config")
}

#[test]
fn test_shipped_config_loads() {
    let store = ConfigStore::load_dir(repo_config_dir()).unwrap();

    let names: Vec<_> = store.tasks().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["compliance_check", "document_processing", "skip_trace"]);

    for task in store.tasks() {
        let agent = task.agent.as_deref().unwrap();
        assert!(store.agent(agent).is_some(), "task {} has unknown agent {}", task.name, agent);
        assert!(task.description.as_deref().unwrap().contains('{'));
    }
}

#[test]
fn test_shipped_retry_settings() {
    let store = ConfigStore::load_dir(repo_config_dir()).unwrap();

    let skip_trace = store.task("skip_trace").unwrap();
    assert_eq!(skip_trace.retry_config.max_attempts, 3);
    assert_eq!(skip_trace.retry_config.delay_seconds, 5.0);

    let compliance = store.task("compliance_check").unwrap();
    assert_eq!(compliance.required_apis, vec!["openrouter"]);
    assert!(compliance.retry_config.max_attempts >= 1);
}

#[test]
fn test_shipped_agents_have_capabilities() {
    let store = ConfigStore::load_dir(repo_config_dir()).unwrap();
    for agent in store.agents() {
        assert!(!agent.capabilities.is_empty(), "agent {} has no capabilities", agent.name);
    }
}

fn params(value: Value) -> Params {
    value.as_object().cloned().unwrap_or_default()
}

#[test]
fn test_shipped_templates_render_with_example_requests() {
    let store = ConfigStore::load_dir(repo_config_dir()).unwrap();
    let requests = [
        (
            "skip_trace",
            json!({"name": "John Doe", "last_known_address": "123 Main St, Anytown, USA", "ai_provider": "openai"}),
            "123 Main St, Anytown, USA",
        ),
        (
            "document_processing",
            json!({"document_url": "https://example.com/document.pdf", "document_type": "claim_form", "ai_provider": "groq"}),
            "https://example.com/document.pdf",
        ),
        (
            "compliance_check",
            json!({"claim_id": "CLM-12345", "jurisdiction": "Oklahoma", "ai_provider": "openrouter"}),
            "CLM-12345",
        ),
    ];

    for (name, request, expected) in requests {
        let task = store.task(name).unwrap();
        let agent = task.agent.as_deref().and_then(|a| store.agent(a));
        let prompt = build_prompt(task, agent, &params(request));

        assert!(prompt.contains(expected), "task {} prompt lacks {}: {}", name, expected, prompt);
        assert!(!prompt.contains('{'), "task {} left a placeholder: {}", name, prompt);
    }
}
