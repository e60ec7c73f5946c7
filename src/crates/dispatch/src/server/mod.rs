//! HTTP transport
//!
//! | method | path                          | body                         |
//! |--------|-------------------------------|------------------------------|
//! | POST   | `/`                           | `{"task": .., "params": {}}` |
//! | GET    | `/health`                     |                              |
//! | GET    | `/agents/:name/capabilities`  |                              |

pub mod error;
pub mod handlers;
pub mod models;

pub use error::{ApiError, ApiErrorResponse, ApiResult};
pub use models::{CapabilitiesResponse, HealthResponse, TaskRequest};

use crate::executor::TaskExecutor;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<TaskExecutor>,
}

/// Build the router
pub fn create_router(executor: Arc<TaskExecutor>) -> Router {
    let state = AppState { executor };

    Router::new()
        .route("/", post(handlers::execute_task))
        .route("/health", get(handlers::health))
        .route("/agents/:name/capabilities", get(handlers::agent_capabilities))
        .fallback(handlers::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C or SIGTERM
pub async fn serve(addr: SocketAddr, executor: Arc<TaskExecutor>) -> std::io::Result<()> {
    let app = create_router(executor);

    tracing::info!("Starting dispatch server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Dispatch server shut down gracefully");
    Ok(())
}

/// Signal for graceful shutdown (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL-C signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}
