//! OpenRouter chat-completions client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::{ApiKey, ProviderConfig};
use crate::error::{ProviderError, ProviderResult};
use crate::extract::{extract_image_ref, extract_message_text, ImageExtraction};
use crate::provider::{ImageProvider, PromptRewriter};
use crate::types::ChatRequest;

/// Value of the `X-Title` header identifying this app to the provider.
pub const APP_TITLE: &str = "Thumbforge";

/// Longest slice of an error body kept in logs.
const MAX_LOGGED_BODY: usize = 2048;

/// Client for an OpenRouter-compatible chat-completions API.
pub struct OpenRouterClient {
    http: Client,
    config: ProviderConfig,
    api_key: ApiKey,
    referer: String,
}

impl OpenRouterClient {
    /// Create a client. Fails when the credential is absent or malformed.
    pub fn new(config: ProviderConfig) -> ProviderResult<Self> {
        let api_key = config
            .credential()?
            .ok_or_else(|| ProviderError::configuration("OPENROUTER_API_KEY is not set"))?;
        let referer = config.referer()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ProviderError::Network)?;

        Ok(Self {
            http,
            config,
            api_key,
            referer,
        })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Whether a prompt-rewriting model is configured.
    pub fn can_rewrite(&self) -> bool {
        self.config.enhancer_model.is_some()
    }

    /// Send one chat-completions request and return the decoded body.
    async fn complete(&self, request: &ChatRequest) -> ProviderResult<Value> {
        let url = self.config.completions_url();
        debug!(model = %request.model, "Sending chat completion request to {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", APP_TITLE)
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::from_transport(e, self.config.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = truncate_for_log(&response.text().await.unwrap_or_default());
            warn!(
                status = status.as_u16(),
                model = %request.model,
                body = %body,
                "Provider request failed"
            );
            return Err(ProviderError::from_http_status(status.as_u16(), body));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("response is not JSON: {}", e)))
    }
}

fn truncate_for_log(text: &str) -> String {
    text.chars().take(MAX_LOGGED_BODY).collect()
}

#[async_trait]
impl ImageProvider for OpenRouterClient {
    fn name(&self) -> &str {
        &self.config.image_model
    }

    async fn generate_image(&self, prompt: &str) -> ProviderResult<String> {
        let request = ChatRequest::image(&self.config.image_model, prompt);
        let payload = self.complete(&request).await?;

        match extract_image_ref(&payload) {
            ImageExtraction::Found(image_ref) => {
                info!(model = %self.config.image_model, "Provider returned an image");
                Ok(image_ref)
            }
            ImageExtraction::NotFound => {
                warn!(
                    model = %self.config.image_model,
                    "No image in provider response: {}",
                    truncate_for_log(&payload.to_string())
                );
                Err(ProviderError::NoImage)
            }
        }
    }
}

#[async_trait]
impl PromptRewriter for OpenRouterClient {
    async fn rewrite(&self, system_prompt: &str, user_message: &str) -> ProviderResult<String> {
        let model = self
            .config
            .enhancer_model
            .as_deref()
            .ok_or_else(|| ProviderError::configuration("PROMPT_ENHANCER_MODEL is not set"))?;

        let request = ChatRequest::text(model, system_prompt, user_message);
        let payload = self.complete(&request).await?;

        extract_message_text(&payload)
            .ok_or_else(|| ProviderError::InvalidResponse("no text in completion".to_string()))
    }
}
