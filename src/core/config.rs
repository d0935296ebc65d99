//! Endpoint configuration management

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, TranslationError};

/// Default OpenAI-compatible base URL of the Gemini API
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Default model identifier
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Immutable model endpoint configuration, loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// API key (secret)
    pub api_key: String,
    /// Base URL of the OpenAI-compatible surface
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
}

impl EndpointConfig {
    /// Create a configuration from explicit values
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` is required; its absence is a fatal startup error.
    /// `GEMINI_BASE_URL` and `GEMINI_MODEL` fall back to the Gemini defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| TranslationError::ConfigError {
            message: "GEMINI_API_KEY is not set. Please ensure it is defined in your environment or .env file".to_string(),
        })?;

        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let config = Self {
            api_key,
            base_url,
            model,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API key is required".to_string(),
            });
        }

        if self.base_url.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "Base URL is required".to_string(),
            });
        }

        if self.model.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "Model identifier is required".to_string(),
            });
        }

        Ok(())
    }

    /// Full URL of the chat-completion route
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = EndpointConfig::new("test_key", DEFAULT_BASE_URL, DEFAULT_MODEL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_missing_key() {
        let config = EndpointConfig::new("", DEFAULT_BASE_URL, DEFAULT_MODEL);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_missing_model() {
        let config = EndpointConfig::new("test_key", DEFAULT_BASE_URL, "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_completions_url_joins_route() {
        let config = EndpointConfig::new("k", "https://example.com/v1beta/openai", "m");
        assert_eq!(
            config.completions_url(),
            "https://example.com/v1beta/openai/chat/completions"
        );
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let config = EndpointConfig::new("k", "https://example.com/v1beta/openai/", "m");
        assert_eq!(
            config.completions_url(),
            "https://example.com/v1beta/openai/chat/completions"
        );
    }

    #[test]
    fn test_from_env() {
        std::env::set_var("GEMINI_API_KEY", "test_key");
        let config = EndpointConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test_key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
