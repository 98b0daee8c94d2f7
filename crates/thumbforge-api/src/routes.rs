//! API routes.

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::{enhance_prompt, generate_thumbnail, health, list_styles, ready};
use crate::metrics::metrics_middleware;
use crate::middleware::{
    cors_layer, handle_panic, json_payload_too_large, rate_limit_middleware, redact_error_details,
    request_id, request_logging, RateLimiterCache,
};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let rate_limiter = Arc::new(RateLimiterCache::new(
        state.config.rate_limit_rps,
        state.config.trust_proxy_headers,
    ));

    let generate_routes = Router::new()
        .route("/generate/enhance-prompt", post(enhance_prompt))
        .route("/generate/thumbnail", post(generate_thumbnail));

    let api_routes = Router::new()
        .merge(generate_routes)
        .route("/styles", get(list_styles))
        .layer(middleware::from_fn_with_state(
            rate_limiter,
            rate_limit_middleware,
        ));

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health))
        .route("/ready", get(ready));

    let metrics_routes = match metrics_handle {
        Some(handle) => Router::new().route("/metrics", get(move || async move { handle.render() })),
        None => Router::new(),
    };

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(json_payload_too_large))
        .layer(middleware::from_fn_with_state(
            state.config.is_production(),
            redact_error_details,
        ))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_logging))
        .layer(middleware::from_fn(request_id))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
