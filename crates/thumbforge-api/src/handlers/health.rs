//! Health check handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::services::GenerationMode;
use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check response.
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    /// `provider`, `fallback` or `misconfigured`
    pub generation: String,
    pub prompt_enhancement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Readiness probe. Fails only when the provider is configured but unusable;
/// the placeholder path is a working mode.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let mode = state.requester.mode();
    let error = match mode {
        GenerationMode::Misconfigured(reason) => Some(reason.clone()),
        _ => None,
    };
    let status = if error.is_some() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    let response = ReadinessResponse {
        status: if error.is_some() { "degraded" } else { "ready" }.to_string(),
        generation: mode.as_str().to_string(),
        prompt_enhancement: if state.enhancer.uses_model() { "llm" } else { "local" }.to_string(),
        error,
    };

    (status, Json(response))
}
