//! Provider error types.

use std::time::Duration;

use thiserror::Error;

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors from the external generation provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Credential or endpoint settings are present but unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Provider rate limit exceeded")]
    RateLimited,

    /// Non-success HTTP status. The body is kept for logs only.
    #[error("Provider request failed with status {status}")]
    Status { status: u16, body: String },

    #[error("No image returned from provider")]
    NoImage,

    #[error("Provider request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
}

impl ProviderError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Classify a non-success HTTP response.
    pub fn from_http_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            429 => Self::RateLimited,
            _ => Self::Status {
                status,
                body: body.into(),
            },
        }
    }

    /// Classify a transport error, separating timeouts from other failures.
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout.as_secs())
        } else {
            Self::Network(err)
        }
    }

    /// Short label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Configuration(_) => "configuration",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::Status { .. } => "status",
            ProviderError::NoImage => "no_image",
            ProviderError::Timeout(_) => "timeout",
            ProviderError::InvalidResponse(_) => "invalid_response",
            ProviderError::Network(_) => "network",
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ProviderError::Timeout(_))
    }
}
