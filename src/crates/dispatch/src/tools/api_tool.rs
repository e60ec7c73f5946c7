//! Bearer-token JSON client for third-party APIs

use crate::error::{DispatchError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tooling::logging::sanitize_for_logging;
use tracing::{error, info};

/// Fixed per-request timeout
pub const TOOL_TIMEOUT: Duration = Duration::from_secs(30);

const BODY_PREVIEW_LIMIT: usize = 512;

/// HTTP client that authenticates every request with a bearer token
#[derive(Clone)]
pub struct ApiTool {
    name: String,
    client: Client,
}

impl ApiTool {
    /// Build a tool with the default 30 second timeout
    pub fn new(name: impl Into<String>, api_key: &str) -> Result<Self> {
        Self::with_timeout(name, api_key, TOOL_TIMEOUT)
    }

    pub fn with_timeout(name: impl Into<String>, api_key: &str, timeout: Duration) -> Result<Self> {
        let name = name.into();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key.trim())).map_err(|_| {
            DispatchError::InvalidConfig(format!("API key for tool {} is not a valid header value", name))
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| DispatchError::InvalidConfig(format!("HTTP client for tool {}: {}", name, e)))?;

        Ok(Self { name, client })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Send a request and decode the JSON response body
    ///
    /// `data`, when present, is sent as the JSON request body.
    /// Non-2xx statuses and bodies that are not JSON are errors. Credentials
    /// in the URL query are redacted in logs and error values.
    pub async fn make_request(&self, url: &str, method: Method, data: Option<&Value>) -> Result<Value> {
        let logged_url = sanitize_for_logging(url);
        info!(tool = %self.name, "Making {} request to {}", method, logged_url);

        let mut request = self.client.request(method, url);
        if let Some(body) = data {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            let message = sanitize_for_logging(&e.to_string());
            error!(tool = %self.name, "Request failed: {}", message);
            DispatchError::ToolRequest {
                url: logged_url.clone(),
                message,
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| DispatchError::ToolRequest {
            url: logged_url.clone(),
            message: sanitize_for_logging(&e.to_string()),
        })?;

        if !status.is_success() {
            let body = preview(&sanitize_for_logging(&text));
            error!(tool = %self.name, status = status.as_u16(), "Request failed: {} returned {}", logged_url, status);
            return Err(DispatchError::ToolStatus {
                url: logged_url.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let value = serde_json::from_str(&text).map_err(|e| {
            error!(tool = %self.name, "Invalid JSON response: {}", e);
            DispatchError::ToolResponse {
                url: logged_url.clone(),
                message: e.to_string(),
            }
        })?;

        info!(tool = %self.name, "Request to {} successful", logged_url);
        Ok(value)
    }

    pub async fn get(&self, url: &str) -> Result<Value> {
        self.make_request(url, Method::GET, None).await
    }

    pub async fn post(&self, url: &str, data: &Value) -> Result<Value> {
        self.make_request(url, Method::POST, Some(data)).await
    }
}

impl fmt::Debug for ApiTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiTool").field("name", &self.name).finish_non_exhaustive()
    }
}

fn preview(body: &str) -> String {
    match body.char_indices().nth(BODY_PREVIEW_LIMIT) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
