//! Validated generation requests.

use thiserror::Error;

use crate::style::ThumbnailStyle;

/// Maximum prompt length in characters.
pub const MAX_PROMPT_LENGTH: usize = 5000;

/// Maximum video title length in characters. Longer titles are truncated.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Client-caused input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Prompt is required and must be a string")]
    MissingPrompt,

    #[error("Prompt must be at most {max} characters (got {actual})")]
    PromptTooLong { max: usize, actual: usize },
}

/// A thumbnail idea with its resolved style and optional video title.
///
/// Construction is the only validation point: a `GenerationRequest` always
/// holds a non-blank prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    style: ThumbnailStyle,
    video_title: Option<String>,
}

impl GenerationRequest {
    /// Create a request with the default style and no title.
    pub fn new(prompt: impl Into<String>) -> Result<Self, ValidationError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ValidationError::MissingPrompt);
        }
        let actual = prompt.chars().count();
        if actual > MAX_PROMPT_LENGTH {
            return Err(ValidationError::PromptTooLong {
                max: MAX_PROMPT_LENGTH,
                actual,
            });
        }

        Ok(Self {
            prompt,
            style: ThumbnailStyle::default(),
            video_title: None,
        })
    }

    /// Build a request from loosely-typed wire fields.
    pub fn from_parts(
        prompt: Option<String>,
        style_id: Option<&str>,
        video_title: Option<String>,
    ) -> Result<Self, ValidationError> {
        let request = Self::new(prompt.ok_or(ValidationError::MissingPrompt)?)?;
        Ok(request
            .with_style(ThumbnailStyle::resolve(style_id))
            .with_video_title(video_title))
    }

    pub fn with_style(mut self, style: ThumbnailStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the video title. Blank titles are treated as absent.
    pub fn with_video_title(mut self, title: Option<String>) -> Self {
        self.video_title = title.as_deref().and_then(sanitize_title);
        self
    }

    /// The idea exactly as the caller wrote it.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> ThumbnailStyle {
        self.style
    }

    pub fn video_title(&self) -> Option<&str> {
        self.video_title.as_deref()
    }
}

/// Trim a title and cap its length; `None` when nothing is left.
pub fn sanitize_title(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_TITLE_LENGTH).collect())
}
