//! Async completion client for the chat endpoint

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::core::agent::AgentIdentity;
use crate::core::config::EndpointConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{ChatMessage, ChatRequest, ChatResponse, Translation, TranslationRequest};
use crate::core::prompt;

/// Completion client holding the fixed agent identity and endpoint
/// configuration established at startup.
///
/// Each translation is a single attempt: one outbound request that either
/// succeeds or fails. No retry, no caching. No request timeout is set by this
/// component; the transport's defaults apply.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    config: Arc<EndpointConfig>,
    agent: Arc<AgentIdentity>,
    permit: Arc<Semaphore>,
}

impl CompletionClient {
    /// Create a new completion client
    pub fn new(config: EndpointConfig, agent: AgentIdentity) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        // One request in flight at a time; the caller waits for the outcome
        // before triggering another.
        let permit = Arc::new(Semaphore::new(1));

        Ok(Self {
            client,
            config: Arc::new(config),
            agent: Arc::new(agent),
            permit,
        })
    }

    /// Create from environment with the translator persona
    pub fn from_env() -> Result<Self> {
        let config = EndpointConfig::from_env()?;
        Self::new(config, AgentIdentity::translator())
    }

    /// Translate a single request.
    ///
    /// Validation failures return before any network traffic. On success the
    /// model's final output is returned unmodified.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<Translation> {
        let user_prompt =
            prompt::build_prompt(&request.text, &request.source_lang, &request.target_lang)?;

        let _permit = self.permit.acquire().await.unwrap();

        debug!(
            "Requesting translation from {} to {} via {}",
            request.source_lang,
            request.target_lang,
            self.config.model
        );

        self.send_request(&user_prompt).await
    }

    /// Send the actual HTTP request
    async fn send_request(&self, user_prompt: &str) -> Result<Translation> {
        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(&self.agent.instructions),
                ChatMessage::user(user_prompt),
            ],
        };

        let response = self
            .client
            .post(self.config.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();
            warn!("Completion endpoint returned {}: {}", status_code, error_text);

            return Err(TranslationError::ApiError {
                status: status_code,
                message: error_text,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponseError {
                message: e.to_string(),
            })?;

        let text = chat
            .final_output()
            .ok_or_else(|| TranslationError::InvalidResponseError {
                message: "No translation in response".to_string(),
            })?
            .to_string();

        let tokens_used = chat.usage.as_ref().map(|u| u.total_tokens).unwrap_or(0);

        Ok(Translation {
            text,
            model_used: self.config.model.clone(),
            request_id: chat.id,
            tokens_used,
        })
    }

    /// Agent persona attached to every request
    pub fn agent(&self) -> &AgentIdentity {
        &self.agent
    }

    /// Endpoint configuration in use
    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> CompletionClient {
        let config = EndpointConfig::new("test_key", "https://example.com/openai", "test-model");
        CompletionClient::new(config, AgentIdentity::translator()).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = test_client();
        assert_eq!(client.config().model, "test-model");
        assert_eq!(client.agent().name, "Translator Agent");
    }

    #[test]
    fn test_client_rejects_empty_key() {
        let config = EndpointConfig::new("", "https://example.com/openai", "test-model");
        assert!(CompletionClient::new(config, AgentIdentity::translator()).is_err());
    }

    #[tokio::test]
    async fn test_validation_happens_before_any_network_call() {
        // The endpoint is unroutable; a validation failure must surface
        // without ever touching it.
        let client = test_client();

        let empty = TranslationRequest::new("   ".to_string(), "Spanish".to_string());
        assert!(matches!(
            client.translate(&empty).await,
            Err(TranslationError::EmptyInput)
        ));

        let same = TranslationRequest::new("Hello".to_string(), "Spanish".to_string())
            .with_source_lang("Spanish");
        assert!(matches!(
            client.translate(&same).await,
            Err(TranslationError::SameLanguage { .. })
        ));
    }

    #[tokio::test]
    async fn test_translator_from_env() {
        std::env::set_var("GEMINI_API_KEY", "test_key");
        let client = CompletionClient::from_env();
        assert!(client.is_ok());
    }
}
