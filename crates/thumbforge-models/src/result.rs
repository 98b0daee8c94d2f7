//! Outputs of the two pipeline stages.

use crate::style::ThumbnailStyle;

/// Resolution every thumbnail is requested at.
pub const THUMBNAIL_RESOLUTION: &str = "1536x1024";

/// Image format every thumbnail is requested in.
pub const THUMBNAIL_FORMAT: &str = "PNG";

/// Image returned when no provider credential is configured.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/1536x1024/png?text=Thumbnail+Preview";

/// Provider name reported for placeholder results.
pub const PLACEHOLDER_PROVIDER: &str = "local-placeholder";

/// A rewritten thumbnail prompt, held by the caller between the two stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancedPrompt {
    pub text: String,
    pub source_prompt: String,
    pub video_title: Option<String>,
}

/// Describes which path produced a thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    pub provider_name: String,
    pub resolution: &'static str,
    pub format: &'static str,
    pub note: Option<String>,
}

impl ProviderMetadata {
    /// Metadata for an image produced by a remote provider model.
    pub fn remote(provider_name: impl Into<String>) -> Self {
        Self {
            provider_name: provider_name.into(),
            resolution: THUMBNAIL_RESOLUTION,
            format: THUMBNAIL_FORMAT,
            note: None,
        }
    }

    /// Metadata for the local placeholder, with the reason it was used.
    pub fn placeholder(reason: impl Into<String>) -> Self {
        Self {
            provider_name: PLACEHOLDER_PROVIDER.to_string(),
            resolution: THUMBNAIL_RESOLUTION,
            format: THUMBNAIL_FORMAT,
            note: Some(reason.into()),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.provider_name == PLACEHOLDER_PROVIDER
    }
}

/// A generated thumbnail. Never persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// URL or data URI of the image
    pub image_ref: String,
    /// Exact prompt sent to (or simulated for) the provider
    pub final_prompt: String,
    pub style: ThumbnailStyle,
    pub video_title: Option<String>,
    pub provider: ProviderMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_metadata() {
        let meta = ProviderMetadata::placeholder("no key");
        assert!(meta.is_placeholder());
        assert_eq!(meta.resolution, "1536x1024");
        assert_eq!(meta.format, "PNG");
        assert_eq!(meta.note.as_deref(), Some("no key"));
    }

    #[test]
    fn test_remote_metadata_has_no_note() {
        let meta = ProviderMetadata::remote("some/model");
        assert!(!meta.is_placeholder());
        assert_eq!(meta.provider_name, "some/model");
        assert!(meta.note.is_none());
    }
}
