//! Route handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::Uri,
    Json,
};

use super::error::{ApiError, ApiResult};
use super::models::{CapabilitiesResponse, HealthResponse, TaskRequest};
use super::AppState;
use crate::executor::ExecutionResult;

/// Handler for POST /
///
/// Task failures still answer 200; only malformed requests are 400.
pub async fn execute_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> ApiResult<Json<ExecutionResult>> {
    let Json(request) = payload?;

    let task = request
        .task_name()
        .ok_or_else(|| ApiError::BadRequest("Missing 'task' in request body".to_string()))?
        .to_string();
    let params = request.params.unwrap_or_default();

    tracing::info!(task = %task, "Received task request");
    let result = state.executor.execute_task(&task, &params).await;
    Ok(Json(result))
}

/// Handler for GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /agents/:name/capabilities
pub async fn agent_capabilities(
    State(state): State<AppState>,
    Path(agent): Path<String>,
) -> Json<CapabilitiesResponse> {
    let capabilities = state.executor.get_agent_capabilities(&agent);
    Json(CapabilitiesResponse { agent, capabilities })
}

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
