//! Application state.

use std::sync::Arc;

use tracing::{error, info, warn};

use thumbforge_provider::{OpenRouterClient, ProviderConfig};

use crate::config::ApiConfig;
use crate::services::{GenerationMode, PromptEnhancer, ThumbnailRequester};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub enhancer: Arc<PromptEnhancer>,
    pub requester: Arc<ThumbnailRequester>,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// Provider settings are read once here. An absent credential selects the
    /// placeholder path; an unusable one is kept as a misconfigured mode so
    /// every generation request reports it.
    pub fn new(config: ApiConfig, provider: ProviderConfig) -> Self {
        let (enhancer, mode) = match provider.credential() {
            Ok(None) => {
                warn!("OPENROUTER_API_KEY is not set, thumbnails will use a placeholder image");
                (PromptEnhancer::local(), GenerationMode::Placeholder)
            }
            Ok(Some(_)) => match OpenRouterClient::new(provider) {
                Ok(client) => {
                    let client = Arc::new(client);
                    info!(
                        model = %client.config().image_model,
                        enhancer_model = ?client.config().enhancer_model,
                        "Image provider configured"
                    );
                    let enhancer = if client.can_rewrite() {
                        PromptEnhancer::with_rewriter(client.clone())
                    } else {
                        PromptEnhancer::local()
                    };
                    (enhancer, GenerationMode::Provider(client))
                }
                Err(e) => {
                    error!("Image provider could not be initialized: {}", e);
                    (PromptEnhancer::local(), GenerationMode::Misconfigured(e.to_string()))
                }
            },
            Err(e) => {
                error!("Image provider credential is unusable: {}", e);
                (PromptEnhancer::local(), GenerationMode::Misconfigured(e.to_string()))
            }
        };

        Self::with_services(config, enhancer, ThumbnailRequester::new(mode))
    }

    /// Build state around already-constructed services.
    pub fn with_services(
        config: ApiConfig,
        enhancer: PromptEnhancer,
        requester: ThumbnailRequester,
    ) -> Self {
        Self {
            config,
            enhancer: Arc::new(enhancer),
            requester: Arc::new(requester),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_selects_placeholder() {
        let state = AppState::new(ApiConfig::default(), ProviderConfig::default());
        assert_eq!(state.requester.mode().as_str(), "fallback");
        assert!(!state.enhancer.uses_model());
    }

    #[test]
    fn test_blank_key_selects_placeholder() {
        let provider = ProviderConfig {
            api_key: Some("   ".to_string()),
            ..ProviderConfig::default()
        };
        let state = AppState::new(ApiConfig::default(), provider);
        assert_eq!(state.requester.mode().as_str(), "fallback");
    }

    #[test]
    fn test_key_selects_provider() {
        let provider = ProviderConfig::with_api_key("http://127.0.0.1:9", "sk-test");
        let state = AppState::new(ApiConfig::default(), provider);
        assert_eq!(state.requester.mode().as_str(), "provider");
        assert!(!state.enhancer.uses_model());
    }

    #[test]
    fn test_enhancer_model_enables_rewriting() {
        let provider = ProviderConfig {
            enhancer_model: Some("test/text-model".to_string()),
            ..ProviderConfig::with_api_key("http://127.0.0.1:9", "sk-test")
        };
        let state = AppState::new(ApiConfig::default(), provider);
        assert!(state.enhancer.uses_model());
    }

    #[test]
    fn test_malformed_key_is_misconfigured() {
        let provider = ProviderConfig::with_api_key("http://127.0.0.1:9", "sk test\nkey");
        let state = AppState::new(ApiConfig::default(), provider);
        assert_eq!(state.requester.mode().as_str(), "misconfigured");
    }

    #[test]
    fn test_bad_public_url_is_misconfigured() {
        let provider = ProviderConfig {
            public_base_url: Some("ftp://example.com".to_string()),
            ..ProviderConfig::with_api_key("http://127.0.0.1:9", "sk-test")
        };
        let state = AppState::new(ApiConfig::default(), provider);
        assert_eq!(state.requester.mode().as_str(), "misconfigured");
    }
}
