//! Client for the external image and chat-completion provider.
//!
//! The pipeline talks to the provider only through the [`ImageProvider`] and
//! [`PromptRewriter`] traits. [`OpenRouterClient`] implements both over an
//! OpenRouter-compatible chat-completions API.

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod provider;
pub mod types;

pub use client::OpenRouterClient;
pub use config::{ApiKey, ProviderConfig};
pub use error::{ProviderError, ProviderResult};
pub use extract::{extract_image_ref, ImageExtraction};
pub use provider::{ImageProvider, PromptRewriter};
