//! Provider configuration.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{ProviderError, ProviderResult};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_IMAGE_MODEL: &str = "nousresearch/nano-banana-pro";
pub const DEFAULT_REFERER: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 45;

/// Settings for the external provider.
///
/// A missing or blank `api_key` is a valid configuration: it selects the
/// local placeholder path instead of the network.
#[derive(Clone)]
pub struct ProviderConfig {
    /// Raw credential as read from the environment
    pub api_key: Option<String>,
    /// Chat-completions API root
    pub base_url: String,
    /// Model used for image generation
    pub image_model: String,
    /// Model used to rewrite prompts. `None` keeps enhancement local.
    pub enhancer_model: Option<String>,
    /// Public URL of this app, sent as the referer
    pub public_base_url: Option<String>,
    /// Upper bound for a single provider call
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            enhancer_model: None,
            public_base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("image_model", &self.image_model)
            .field("enhancer_model", &self.enhancer_model)
            .field("public_base_url", &self.public_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProviderConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENROUTER_API_KEY").ok(),
            base_url: std::env::var("OPENROUTER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            image_model: std::env::var("THUMBNAIL_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
            enhancer_model: std::env::var("PROMPT_ENHANCER_MODEL")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            public_base_url: std::env::var("PUBLIC_APP_URL")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            timeout: Duration::from_secs(
                std::env::var("PROVIDER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }

    /// Config pointing at a given endpoint with a credential.
    pub fn with_api_key(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// The validated credential, `None` when absent.
    pub fn credential(&self) -> ProviderResult<Option<ApiKey>> {
        match self.api_key.as_deref() {
            Some(raw) => ApiKey::parse(raw),
            None => Ok(None),
        }
    }

    /// Referer header value, checked to be an absolute http(s) URL.
    pub fn referer(&self) -> ProviderResult<String> {
        let Some(raw) = self.public_base_url.as_deref() else {
            return Ok(DEFAULT_REFERER.to_string());
        };

        let url = Url::parse(raw.trim())
            .map_err(|e| ProviderError::configuration(format!("PUBLIC_APP_URL is invalid: {}", e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ProviderError::configuration(format!(
                "PUBLIC_APP_URL must use http or https, got {}",
                url.scheme()
            )));
        }
        Ok(url.as_str().trim_end_matches('/').to_string())
    }

    /// `{base_url}/chat/completions`
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// A bearer credential that is safe to put in a header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Parse a raw credential. Blank input counts as absent; anything that
    /// cannot be sent as a bearer token is a configuration error.
    pub fn parse(raw: &str) -> ProviderResult<Option<ApiKey>> {
        let key = raw.trim();
        if key.is_empty() {
            return Ok(None);
        }
        if !key.chars().all(|c| c.is_ascii_graphic()) {
            return Err(ProviderError::configuration(
                "OPENROUTER_API_KEY contains whitespace or non-printable characters",
            ));
        }
        Ok(Some(ApiKey(key.to_string())))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.image_model, "nousresearch/nano-banana-pro");
        assert_eq!(config.timeout, Duration::from_secs(45));
        assert!(config.credential().unwrap().is_none());
    }

    #[test]
    fn test_blank_key_is_absent() {
        assert!(ApiKey::parse("").unwrap().is_none());
        assert!(ApiKey::parse("   ").unwrap().is_none());
    }

    #[test]
    fn test_key_is_trimmed() {
        let key = ApiKey::parse("  sk-or-v1-abc  ").unwrap().unwrap();
        assert_eq!(key.expose(), "sk-or-v1-abc");
    }

    #[test]
    fn test_malformed_key_is_configuration_error() {
        assert!(matches!(
            ApiKey::parse("sk-or v1"),
            Err(ProviderError::Configuration(_))
        ));
        assert!(matches!(
            ApiKey::parse("sk-\u{7f}key"),
            Err(ProviderError::Configuration(_))
        ));
        assert!(matches!(
            ApiKey::parse("sk-ключ"),
            Err(ProviderError::Configuration(_))
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ProviderConfig::with_api_key("http://localhost", "sk-secret");
        assert!(!format!("{:?}", config).contains("sk-secret"));
        let key = ApiKey::parse("sk-secret").unwrap().unwrap();
        assert!(!format!("{:?}", key).contains("sk-secret"));
    }

    #[test]
    fn test_referer() {
        let mut config = ProviderConfig::default();
        assert_eq!(config.referer().unwrap(), "http://localhost:3000");

        config.public_base_url = Some("https://thumbs.example.com/".to_string());
        assert_eq!(config.referer().unwrap(), "https://thumbs.example.com");

        config.public_base_url = Some("not a url".to_string());
        assert!(matches!(config.referer(), Err(ProviderError::Configuration(_))));

        config.public_base_url = Some("ftp://thumbs.example.com".to_string());
        assert!(matches!(config.referer(), Err(ProviderError::Configuration(_))));
    }

    #[test]
    fn test_completions_url() {
        let config = ProviderConfig::with_api_key("http://127.0.0.1:9000/api/v1/", "k");
        assert_eq!(
            config.completions_url(),
            "http://127.0.0.1:9000/api/v1/chat/completions"
        );
    }
}
