//! HTTP server module: the gateway through which library events enter the
//! system.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::{config::AppConfig, producer::EventPublisher};

mod error;
mod library_events;

pub use error::ApiError;
use library_events::{post_library_event, put_library_event};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct ApiState {
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// The long-lived event publisher, shared across all handlers.
    pub publisher: Arc<dyn EventPublisher>,
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Builds the application router with all routes and shared state.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/libraryevent", post(post_library_event).put(put_library_event))
        .with_state(state)
}

/// Runs the HTTP server based on the provided application configuration.
pub async fn run_server_from_config(config: Arc<AppConfig>, publisher: Arc<dyn EventPublisher>) {
    let addr: SocketAddr =
        config.server.listen_address.parse().expect("Invalid server.listen_address format");

    let app = build_router(ApiState { config, publisher });

    let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping HTTP server");
}
