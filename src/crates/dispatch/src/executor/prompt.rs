//! Prompt rendering from task definitions and request params

use crate::config::{AgentConfig, TaskConfig};
use crate::executor::{Params, PROVIDER_PARAM};
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("valid placeholder pattern"))
}

/// Render the prompt sent to the provider
///
/// The agent's role and goal, if any, open the prompt. The task
/// description follows with `{key}` placeholders replaced by params.
/// Tasks without a description list their params as `key: value` lines.
/// `expected_output` is appended last.
pub fn build_prompt(task: &TaskConfig, agent: Option<&AgentConfig>, params: &Params) -> String {
    let mut sections = Vec::new();

    if let Some(preamble) = agent.and_then(agent_preamble) {
        sections.push(preamble);
    }

    match task.description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => {
            sections.push(render_template(description, params));
        }
        _ => sections.push(param_listing(&task.name, params)),
    }

    if let Some(expected) = task.expected_output.as_deref().map(str::trim) {
        if !expected.is_empty() {
            sections.push(format!("Expected output: {}", expected));
        }
    }

    sections.join("\n\n")
}

fn agent_preamble(agent: &AgentConfig) -> Option<String> {
    let role = agent.role.as_deref().map(str::trim).filter(|r| !r.is_empty());
    let goal = agent.goal.as_deref().map(str::trim).filter(|g| !g.is_empty());

    match (role, goal) {
        (Some(role), Some(goal)) => Some(format!("You are {}. Your goal: {}", role, goal)),
        (Some(role), None) => Some(format!("You are {}.", role)),
        (None, Some(goal)) => Some(format!("Your goal: {}", goal)),
        (None, None) => None,
    }
}

/// Replace `{key}` with the param value; unknown placeholders stay as written
///
/// Substituted text is not scanned again.
pub fn render_template(template: &str, params: &Params) -> String {
    placeholder_pattern()
        .replace_all(template, |caps: &Captures<'_>| {
            params
                .get(&caps[1])
                .and_then(value_text)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn param_listing(task_name: &str, params: &Params) -> String {
    let mut out = format!("Task: {}", task_name);
    for (key, value) in params {
        if key == PROVIDER_PARAM {
            continue;
        }
        let text = value_text(value).unwrap_or_else(|| value.to_string());
        out.push_str(&format!("\n{}: {}", key, text));
    }
    out
}

/// Scalars render bare; arrays and objects are not substituted
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => panic!("params must be an object"),
        }
    }

    #[test]
    fn test_template_substitution() {
        let task = TaskConfig::new("skip_trace")
            .with_description("Locate {name}, last seen at {last_known_address}.");
        let p = params(json!({"name": "John Doe", "last_known_address": "123 Main St, Tulsa, OK"}));

        assert_eq!(
            build_prompt(&task, None, &p),
            "Locate John Doe, last seen at 123 Main St, Tulsa, OK."
        );
    }

    #[test]
    fn test_numbers_bools_and_missing_placeholders() {
        let p = params(json!({"amount": 1200.5, "urgent": true, "tags": ["a"]}));
        assert_eq!(
            render_template("{amount} {urgent} {tags} {missing}", &p),
            "1200.5 true {tags} {missing}"
        );
    }

    #[test]
    fn test_substituted_text_is_not_rendered_again() {
        let p = params(json!({"claim_id": "CLM-1 {jurisdiction}", "jurisdiction": "Oklahoma"}));
        assert_eq!(
            render_template("Review claim {claim_id} in {jurisdiction}", &p),
            "Review claim CLM-1 {jurisdiction} in Oklahoma"
        );
    }

    #[test]
    fn test_agent_preamble_and_expected_output() {
        let mut task = TaskConfig::new("compliance_check").with_description("Review claim {claim_id}.");
        task.expected_output = Some("A yes/no verdict".into());
        let agent = AgentConfig {
            name: "compliance_officer".into(),
            role: Some("an insurance compliance officer".into()),
            goal: Some("flag regulatory issues".into()),
            capabilities: vec![],
        };
        let p = params(json!({"claim_id": "CLM-12345"}));

        assert_eq!(
            build_prompt(&task, Some(&agent), &p),
            "You are an insurance compliance officer. Your goal: flag regulatory issues\n\n\
             Review claim CLM-12345.\n\n\
             Expected output: A yes/no verdict"
        );
    }

    #[test]
    fn test_listing_without_description() {
        let task = TaskConfig::new("document_processing");
        let p = params(json!({"ai_provider": "groq", "document": "invoice.pdf", "pages": 3}));

        assert_eq!(
            build_prompt(&task, None, &p),
            "Task: document_processing\ndocument: invoice.pdf\npages: 3"
        );
    }

    #[test]
    fn test_agent_without_persona_adds_nothing() {
        let task = TaskConfig::new("t").with_description("Do it");
        let agent = AgentConfig::default();
        assert_eq!(build_prompt(&task, Some(&agent), &Params::new()), "Do it");
    }
}
