//! Axum HTTP API for thumbnail generation.
//!
//! This crate provides:
//! - Prompt enhancement and thumbnail generation endpoints
//! - Placeholder thumbnails when no provider credential is configured
//! - Per-IP rate limiting
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{GenerationMode, PromptEnhancer, ThumbnailRequester};
pub use state::AppState;
