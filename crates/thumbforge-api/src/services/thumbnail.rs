//! Thumbnail requests.

use std::fmt;
use std::sync::Arc;

use tracing::{error, info, warn};

use thumbforge_models::{
    GenerationRequest, GenerationResult, ProviderMetadata, ThumbnailStyle, PLACEHOLDER_IMAGE_URL,
};
use thumbforge_provider::ImageProvider;

use crate::error::{ApiError, ApiResult};
use crate::metrics;

/// Fixed instructions appended to every final prompt.
pub const FORMAT_INSTRUCTIONS: &str =
    "YouTube thumbnail format, 16:9 aspect ratio, eye-catching composition, professional quality.";

/// Note attached to placeholder results.
pub const PLACEHOLDER_NOTE: &str =
    "Using placeholder image because OPENROUTER_API_KEY is not configured.";

/// How images are obtained, fixed when the requester is built.
#[derive(Clone)]
pub enum GenerationMode {
    /// Call the remote provider once per request.
    Provider(Arc<dyn ImageProvider>),
    /// No credential: return the placeholder without touching the network.
    Placeholder,
    /// A credential is set but unusable. Every request fails with the reason.
    Misconfigured(String),
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Provider(_) => "provider",
            GenerationMode::Placeholder => "fallback",
            GenerationMode::Misconfigured(_) => "misconfigured",
        }
    }
}

impl fmt::Debug for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::Provider(p) => f.debug_tuple("Provider").field(&p.name()).finish(),
            GenerationMode::Placeholder => f.write_str("Placeholder"),
            GenerationMode::Misconfigured(reason) => {
                f.debug_tuple("Misconfigured").field(reason).finish()
            }
        }
    }
}

/// Composes final prompts and obtains thumbnails.
#[derive(Debug, Clone)]
pub struct ThumbnailRequester {
    mode: GenerationMode,
}

impl ThumbnailRequester {
    pub fn new(mode: GenerationMode) -> Self {
        Self { mode }
    }

    pub fn placeholder() -> Self {
        Self::new(GenerationMode::Placeholder)
    }

    pub fn with_provider(provider: Arc<dyn ImageProvider>) -> Self {
        Self::new(GenerationMode::Provider(provider))
    }

    pub fn mode(&self) -> &GenerationMode {
        &self.mode
    }

    /// Produce a thumbnail for `request`. No retries: a provider failure is
    /// returned to the caller as-is.
    pub async fn request_thumbnail(&self, request: &GenerationRequest) -> ApiResult<GenerationResult> {
        let style = request.style();
        let final_prompt = compose_final_prompt(request.prompt(), style);
        info!(style = %style, mode = self.mode.as_str(), "Generating thumbnail with prompt: {}", final_prompt);

        let (image_ref, provider) = match &self.mode {
            GenerationMode::Placeholder => (
                PLACEHOLDER_IMAGE_URL.to_string(),
                ProviderMetadata::placeholder(PLACEHOLDER_NOTE),
            ),
            GenerationMode::Provider(provider) => {
                let image_ref = provider.generate_image(&final_prompt).await.map_err(|e| {
                    warn!(error = %e, kind = e.kind(), provider = provider.name(), "Thumbnail generation failed");
                    metrics::record_provider_failure(e.kind());
                    ApiError::from(e)
                })?;
                (image_ref, ProviderMetadata::remote(provider.name()))
            }
            GenerationMode::Misconfigured(reason) => {
                error!("Image provider is misconfigured: {}", reason);
                metrics::record_provider_failure("configuration");
                return Err(ApiError::configuration(reason.clone()));
            }
        };

        metrics::record_thumbnail_generated(if provider.is_placeholder() {
            "fallback"
        } else {
            "provider"
        });

        Ok(GenerationResult {
            image_ref,
            final_prompt,
            style,
            video_title: request.video_title().map(str::to_string),
            provider,
        })
    }
}

/// `{prompt}. {style modifier}. {format instructions}`
pub fn compose_final_prompt(prompt: &str, style: ThumbnailStyle) -> String {
    format!("{}. {}. {}", prompt.trim(), style.modifier(), FORMAT_INSTRUCTIONS)
}
