//! API error types.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use thumbforge_models::ValidationError;
use thumbforge_provider::ProviderError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Provider settings are present but unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request body exceeds the size limit")]
    PayloadTooLarge,

    #[error("Rate limited")]
    RateLimited,
}

impl ApiError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::RateLimited | ApiError::Provider(ProviderError::RateLimited) => {
                StatusCode::TOO_MANY_REQUESTS
            }
            ApiError::Provider(ProviderError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Provider(_) | ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing message and optional diagnostic detail.
    fn body(&self) -> (String, Option<String>) {
        match self {
            ApiError::Validation(e) => (e.to_string(), None),
            ApiError::BadRequest(msg) => ("Invalid request body".to_string(), Some(msg.clone())),
            ApiError::PayloadTooLarge => ("Request body is too large".to_string(), None),
            ApiError::RateLimited | ApiError::Provider(ProviderError::RateLimited) => {
                ("Rate limit exceeded. Please try again later.".to_string(), None)
            }
            ApiError::Configuration(msg) | ApiError::Provider(ProviderError::Configuration(msg)) => (
                "Image provider API key is not configured".to_string(),
                Some(msg.clone()),
            ),
            ApiError::Provider(ProviderError::Timeout(_)) => (
                "Thumbnail generation timed out. Please try again.".to_string(),
                Some(self.to_string()),
            ),
            ApiError::Provider(e) => (
                "Failed to generate thumbnail. Please try again.".to_string(),
                Some(e.to_string()),
            ),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge;
        }
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Error body shared by every endpoint.
///
/// A copy rides along in the response extensions so outer layers can
/// re-render it (see `middleware::redact_error_details`).
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error, details) = self.body();

        if status.is_server_error() {
            error!(status = status.as_u16(), "Request failed: {}", self);
        } else {
            warn!(status = status.as_u16(), "Request rejected: {}", self);
        }

        let body = ErrorResponse { error, details };
        let mut response = (status, Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(ValidationError::MissingPrompt).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ProviderError::from_http_status(500, "x")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(ProviderError::NoImage).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(ProviderError::RateLimited).status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::from(ProviderError::Timeout(45)).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ApiError::configuration("bad key").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message() {
        let (error, details) = ApiError::from(ValidationError::MissingPrompt).body();
        assert_eq!(error, "Prompt is required and must be a string");
        assert!(details.is_none());
    }

    #[test]
    fn test_provider_body_keeps_upstream_text_out_of_error() {
        let err = ApiError::from(ProviderError::from_http_status(503, "upstream stack trace"));
        let (error, details) = err.body();
        assert_eq!(error, "Failed to generate thumbnail. Please try again.");
        let details = details.unwrap();
        assert!(details.contains("503"));
        assert!(!details.contains("upstream stack trace"));
    }

    #[test]
    fn test_payload_too_large() {
        let err = ApiError::PayloadTooLarge;
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.body().0, "Request body is too large");
    }

    #[test]
    fn test_response_carries_error_body_extension() {
        let response = ApiError::from(ProviderError::NoImage).into_response();
        let body = response.extensions().get::<ErrorResponse>().unwrap();
        assert_eq!(body.error, "Failed to generate thumbnail. Please try again.");
        assert!(body.details.is_some());
    }
}
