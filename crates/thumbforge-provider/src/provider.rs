//! Provider seams used by the generation pipeline.

use async_trait::async_trait;

use crate::error::ProviderResult;

/// Turns a final prompt into an image reference.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Model or service name reported in result metadata.
    fn name(&self) -> &str;

    /// Make exactly one attempt to render `prompt`.
    async fn generate_image(&self, prompt: &str) -> ProviderResult<String>;
}

/// Rewrites a thumbnail idea with a language model.
#[async_trait]
pub trait PromptRewriter: Send + Sync {
    async fn rewrite(&self, system_prompt: &str, user_message: &str) -> ProviderResult<String>;
}
