//! Prompt enhancement.
//!
//! The local composition is the guaranteed result. A language model can be
//! plugged in as a [`PromptRewriter`]; when it fails or returns nothing the
//! local composition is used instead, so enhancement never errors.

use std::sync::Arc;

use tracing::{debug, warn};

use thumbforge_models::{EnhancedPrompt, GenerationRequest, ThumbnailStyle};
use thumbforge_provider::PromptRewriter;

use crate::metrics;

/// Turns a raw thumbnail idea into a more descriptive prompt.
#[derive(Clone, Default)]
pub struct PromptEnhancer {
    rewriter: Option<Arc<dyn PromptRewriter>>,
}

impl PromptEnhancer {
    /// Enhancer that only uses the local composition.
    pub fn local() -> Self {
        Self { rewriter: None }
    }

    /// Enhancer that asks a language model first.
    pub fn with_rewriter(rewriter: Arc<dyn PromptRewriter>) -> Self {
        Self {
            rewriter: Some(rewriter),
        }
    }

    pub fn uses_model(&self) -> bool {
        self.rewriter.is_some()
    }

    pub async fn enhance(&self, request: &GenerationRequest) -> EnhancedPrompt {
        let text = match &self.rewriter {
            Some(rewriter) => self.rewrite_or_compose(rewriter.as_ref(), request).await,
            None => {
                metrics::record_prompt_enhanced("local");
                compose_local(request)
            }
        };

        EnhancedPrompt {
            text,
            source_prompt: request.prompt().to_string(),
            video_title: request.video_title().map(str::to_string),
        }
    }

    async fn rewrite_or_compose(
        &self,
        rewriter: &dyn PromptRewriter,
        request: &GenerationRequest,
    ) -> String {
        let system = system_prompt(request.style());
        let user = user_message(request);

        match rewriter.rewrite(&system, &user).await {
            Ok(text) if !text.trim().is_empty() => {
                debug!(style = %request.style(), "Prompt rewritten by language model");
                metrics::record_prompt_enhanced("llm");
                text.trim().to_string()
            }
            Ok(_) => {
                warn!("Language model returned an empty prompt, using local enhancement");
                metrics::record_prompt_enhanced("local");
                compose_local(request)
            }
            Err(e) => {
                warn!(error = %e, kind = e.kind(), "Prompt rewrite failed, using local enhancement");
                metrics::record_prompt_enhanced("local");
                compose_local(request)
            }
        }
    }
}

/// Deterministic enhancement: names the format, the video, and the style,
/// then appends the trimmed idea.
pub fn compose_local(request: &GenerationRequest) -> String {
    let base = match request.video_title() {
        Some(title) => format!("YouTube thumbnail for video titled \"{}\"", title),
        None => "YouTube thumbnail concept".to_string(),
    };

    format!(
        "{} in {} style: {}",
        base,
        request.style().id(),
        request.prompt().trim()
    )
}

fn system_prompt(style: ThumbnailStyle) -> String {
    format!(
        r#"You are an expert YouTube thumbnail designer and prompt engineer. Your job is to take a user's basic thumbnail idea and transform it into a detailed, professional prompt that will generate an eye-catching YouTube thumbnail.

Key guidelines:
1. YouTube thumbnails are 1280x720 pixels (16:9 aspect ratio)
2. They need to be attention-grabbing and readable even at small sizes
3. Include specific details about composition, lighting, colors, and mood
4. Mention text placement and style if relevant
5. Focus on creating visual impact and emotional appeal
6. Keep the enhanced prompt concise but detailed (2-3 sentences max)
7. Don't use phrases like "create a thumbnail" - describe the image directly
8. Consider the selected style: {} ({})

Reply with the enhanced prompt only."#,
        style.id(),
        style.label()
    )
}

fn user_message(request: &GenerationRequest) -> String {
    match request.video_title() {
        Some(title) => format!(
            "Video Title: \"{}\"\n\nThumbnail Idea: {}",
            title,
            request.prompt()
        ),
        None => request.prompt().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use thumbforge_provider::{ProviderError, ProviderResult};

    use super::*;

    /// Replies with `reply`, or fails with a 503 when it is `None`.
    struct FixedRewriter {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl FixedRewriter {
        fn ok(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PromptRewriter for FixedRewriter {
        async fn rewrite(&self, system_prompt: &str, _user_message: &str) -> ProviderResult<String> {
            assert!(system_prompt.contains("YouTube thumbnail designer"));
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .clone()
                .ok_or_else(|| ProviderError::from_http_status(503, "down"))
        }
    }

    fn pasta_request() -> GenerationRequest {
        GenerationRequest::from_parts(
            Some("a chef tossing pasta".to_string()),
            Some("cinematic"),
            Some("Perfect Pasta".to_string()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_pasta_scenario() {
        let enhanced = PromptEnhancer::local().enhance(&pasta_request()).await;
        assert!(enhanced.text.contains("Perfect Pasta"));
        assert!(enhanced.text.contains("cinematic"));
        assert!(enhanced.text.contains("a chef tossing pasta"));
        assert_eq!(
            enhanced.text,
            "YouTube thumbnail for video titled \"Perfect Pasta\" in cinematic style: a chef tossing pasta"
        );
        assert_eq!(enhanced.source_prompt, "a chef tossing pasta");
        assert_eq!(enhanced.video_title.as_deref(), Some("Perfect Pasta"));
    }

    #[tokio::test]
    async fn test_without_title_uses_concept_phrase() {
        let request = GenerationRequest::new("a cat on a skateboard").unwrap();
        let enhanced = PromptEnhancer::local().enhance(&request).await;
        assert_eq!(
            enhanced.text,
            "YouTube thumbnail concept in photorealistic style: a cat on a skateboard"
        );
        assert!(enhanced.video_title.is_none());
    }

    #[tokio::test]
    async fn test_unknown_style_names_default() {
        let request =
            GenerationRequest::from_parts(Some("a cat".to_string()), Some("claymation"), None)
                .unwrap();
        let enhanced = PromptEnhancer::local().enhance(&request).await;
        assert!(enhanced.text.contains("in photorealistic style"));
    }

    #[tokio::test]
    async fn test_output_is_trimmed_and_contains_idea() {
        let request = GenerationRequest::new("  neon city at night \n").unwrap();
        let enhanced = PromptEnhancer::local().enhance(&request).await;
        assert_eq!(
            enhanced.text,
            "YouTube thumbnail concept in photorealistic style: neon city at night"
        );
        assert_eq!(enhanced.source_prompt, "  neon city at night \n");
    }

    #[tokio::test]
    async fn test_enhance_is_idempotent() {
        let enhancer = PromptEnhancer::local();
        let first = enhancer.enhance(&pasta_request()).await;
        let second = enhancer.enhance(&pasta_request()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_rewriter_result_is_used() {
        let rewriter = Arc::new(FixedRewriter::ok("  Chef mid-toss, pasta arcing overhead.  "));
        let enhancer = PromptEnhancer::with_rewriter(rewriter.clone());
        assert!(enhancer.uses_model());

        let enhanced = enhancer.enhance(&pasta_request()).await;
        assert_eq!(enhanced.text, "Chef mid-toss, pasta arcing overhead.");
        assert_eq!(rewriter.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rewriter_failure_falls_back_to_local() {
        let rewriter = Arc::new(FixedRewriter::failing());
        let enhanced = PromptEnhancer::with_rewriter(rewriter.clone())
            .enhance(&pasta_request())
            .await;
        assert_eq!(enhanced.text, compose_local(&pasta_request()));
        assert_eq!(rewriter.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_rewrite_falls_back_to_local() {
        let rewriter = Arc::new(FixedRewriter::ok("   "));
        let enhanced = PromptEnhancer::with_rewriter(rewriter)
            .enhance(&pasta_request())
            .await;
        assert_eq!(enhanced.text, compose_local(&pasta_request()));
    }

    #[test]
    fn test_user_message_includes_title() {
        assert_eq!(
            user_message(&pasta_request()),
            "Video Title: \"Perfect Pasta\"\n\nThumbnail Idea: a chef tossing pasta"
        );
    }
}
