//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Install the Prometheus recorder and return a handle for rendering.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "thumbforge_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "thumbforge_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "thumbforge_http_requests_in_flight";

    // Pipeline metrics
    pub const THUMBNAILS_GENERATED_TOTAL: &str = "thumbforge_thumbnails_generated_total";
    pub const PROVIDER_FAILURES_TOTAL: &str = "thumbforge_provider_failures_total";
    pub const PROMPTS_ENHANCED_TOTAL: &str = "thumbforge_prompts_enhanced_total";

    // Rate limiting metrics
    pub const RATE_LIMIT_HITS_TOTAL: &str = "thumbforge_rate_limit_hits_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a thumbnail produced by `path` (`provider` or `fallback`).
pub fn record_thumbnail_generated(path: &str) {
    let labels = [("path", path.to_string())];
    counter!(names::THUMBNAILS_GENERATED_TOTAL, &labels).increment(1);
}

/// Record a failed provider call by error kind.
pub fn record_provider_failure(kind: &str) {
    let labels = [("kind", kind.to_string())];
    counter!(names::PROVIDER_FAILURES_TOTAL, &labels).increment(1);
}

/// Record an enhanced prompt by source (`llm` or `local`).
pub fn record_prompt_enhanced(source: &str) {
    let labels = [("source", source.to_string())];
    counter!(names::PROMPTS_ENHANCED_TOTAL, &labels).increment(1);
}

/// Record rate limit hit.
pub fn record_rate_limit_hit(endpoint: &str) {
    let labels = [("endpoint", endpoint.to_string())];
    counter!(names::RATE_LIMIT_HITS_TOTAL, &labels).increment(1);
}

/// Metrics middleware for HTTP requests.
///
/// Labels use the matched route template so unknown paths don't create
/// unbounded label values.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);
    let response = next.run(request).await;
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
