//! Router tests driven through `tower::ServiceExt::oneshot`

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use dispatch::server::create_router;
use dispatch::{ConfigStore, TaskExecutor, ToolRegistry};
use llm::{ProviderRegistry, TextProvider};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct Upper;

#[async_trait]
impl TextProvider for Upper {
    fn name(&self) -> &str {
        "groq"
    }

    fn model(&self) -> &str {
        "upper"
    }

    async fn generate_text(&self, prompt: &str, _max_tokens: usize) -> llm::Result<String> {
        Ok(prompt.to_uppercase())
    }
}

fn app() -> Router {
    let config = ConfigStore::from_yaml_strs(
        "document_processor:\n  capabilities: [document_classification, field_extraction]\n",
        "document_processing:\n  agent: document_processor\n  description: classify {document_url}\n  required_apis: [groq]\n",
    )
    .unwrap();
    let providers = ProviderRegistry::new().with("groq", Arc::new(Upper));
    let executor = TaskExecutor::new(config, providers, ToolRegistry::new());
    create_router(Arc::new(executor))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_execute_success() {
    let request = post_json(
        r#"{"task":"document_processing","params":{"ai_provider":"groq","document_url":"https://example.com/invoice.pdf"}}"#,
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "task": "document_processing",
            "result": {"task_output": "CLASSIFY HTTPS://EXAMPLE.COM/INVOICE.PDF", "provider": "groq", "attempts": 1}
        })
    );
}

#[tokio::test]
async fn test_task_error_is_still_ok_status() {
    let (status, body) = send(app(), post_json(r#"{"task":"skip_trace"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "error", "task": "skip_trace", "error": "Task skip_trace not found"})
    );
}

#[tokio::test]
async fn test_params_absent_defaults_to_openai() {
    let (status, body) = send(app(), post_json(r#"{"task":"document_processing"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "Unknown AI provider: openai");
}

#[tokio::test]
async fn test_missing_task_is_bad_request() {
    for payload in [r#"{"params":{}}"#, r#"{"task":""}"#, r#"{"task":null}"#] {
        let (status, body) = send(app(), post_json(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
        assert_eq!(body["error"], "BadRequest");
        assert_eq!(body["message"], "Bad request: Missing 'task' in request body");
        assert_eq!(body["code"], "BAD_REQUEST");
    }
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (status, body) = send(app(), post_json("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "JSON_ERROR");
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(r#"{"task":"document_processing"}"#))
        .unwrap();
    let (status, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_agent_capabilities() {
    let (status, body) = send(app(), get("/agents/document_processor/capabilities")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "agent": "document_processor",
            "capabilities": ["document_classification", "field_extraction"]
        })
    );

    let (status, body) = send(app(), get("/agents/ghost/capabilities")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"agent": "ghost", "capabilities": []}));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (status, body) = send(app(), get("/nowhere")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Not found: /nowhere");
}
