//! HTTP surface for chatlens.
//!
//! A thin axum layer over the parsing/analytics core and the generation
//! client. Three POST endpoints mirror the frontend contract:
//!
//! - `/summarize` turns the windowed chat into a prose summary
//! - `/ask` answers a free-text question about the chat
//! - `/analytics` returns an [`crate::analytics::AnalyticsResult`]
//!
//! Failures render FastAPI-style as `{ "detail": "..." }` so existing
//! clients keep working.

mod routes;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::cache::ResponseCache;
use crate::config::LlmConfig;
use crate::error::ChatlensError;
use crate::llm::OllamaClient;

pub use routes::{AnalyticsRequest, AskRequest, AskResponse, SummarizeRequest, SummarizeResponse};

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<LlmConfig>,
    pub client: Arc<OllamaClient>,
    pub cache: Arc<ResponseCache>,
}

impl AppState {
    /// Builds state from a configuration, creating the client and cache.
    pub fn new(config: LlmConfig) -> Self {
        let client = OllamaClient::new(config.base_url.clone());
        Self {
            config: Arc::new(config),
            client: Arc::new(client),
            cache: Arc::new(ResponseCache::new()),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/summarize", post(routes::summarize))
        .route("/ask", post(routes::ask))
        .route("/analytics", post(routes::analytics))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Error shape returned to clients: status + `{ "detail": ... }`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    pub fn bad_gateway(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            detail: detail.into(),
        }
    }
}

impl From<ChatlensError> for ApiError {
    fn from(err: ChatlensError) -> Self {
        if err.is_empty_input() {
            ApiError::bad_request(err.to_string())
        } else {
            tracing::error!(error = %err, "generation failed");
            ApiError::bad_gateway(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": self.detail }));
        (self.status, body).into_response()
    }
}
