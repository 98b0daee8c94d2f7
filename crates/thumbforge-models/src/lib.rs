//! Shared data models for the thumbnail generation pipeline.
//!
//! This crate provides:
//! - The closed catalog of thumbnail styles
//! - Validated generation requests
//! - Enhancement and generation results

pub mod request;
pub mod result;
pub mod style;

// Re-export common types
pub use request::{sanitize_title, GenerationRequest, ValidationError, MAX_PROMPT_LENGTH, MAX_TITLE_LENGTH};
pub use result::{
    EnhancedPrompt, GenerationResult, ProviderMetadata, PLACEHOLDER_IMAGE_URL, PLACEHOLDER_PROVIDER,
    THUMBNAIL_FORMAT, THUMBNAIL_RESOLUTION,
};
pub use style::{StyleEntry, StyleParseError, ThumbnailStyle, DEFAULT_STYLE_ID};
