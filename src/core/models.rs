//! Core data models for translation

use serde::{Deserialize, Serialize};

use crate::core::languages;

/// Translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslationRequest {
    /// Create a request with an auto-detected source language
    pub fn new(text: String, target_lang: String) -> Self {
        Self {
            text,
            source_lang: languages::AUTO.to_string(),
            target_lang,
        }
    }

    /// Set an explicit source language
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = source_lang.into();
        self
    }
}

/// Successful translation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    /// The model's final textual output, unmodified
    pub text: String,
    /// Model that produced the translation
    pub model_used: String,
    /// Endpoint-assigned request id, if present
    pub request_id: Option<String>,
    /// Total tokens reported by the endpoint
    pub tokens_used: usize,
}

/// Chat-completion request body (OpenAI-compatible)
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// One turn of a chat-completion conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// System turn carrying the agent instructions
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// User turn carrying the built prompt
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completion response body (OpenAI-compatible)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// A single completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token accounting reported by the endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: usize,
    #[serde(default)]
    pub completion_tokens: usize,
    #[serde(default)]
    pub total_tokens: usize,
}

impl ChatResponse {
    /// Final textual output, if the response carries a usable one
    pub fn final_output(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|c| c.message.content.as_str())
            .filter(|content| !content.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_request_defaults_to_auto_source() {
        let request = TranslationRequest::new("Hello".to_string(), "Spanish".to_string());
        assert_eq!(request.source_lang, "auto");
        assert_eq!(request.target_lang, "Spanish");
    }

    #[test]
    fn test_request_with_explicit_source() {
        let request = TranslationRequest::new("Hola".to_string(), "English".to_string())
            .with_source_lang("Spanish");
        assert_eq!(request.source_lang, "Spanish");
    }

    #[test]
    fn test_chat_request_wire_format() {
        let request = ChatRequest {
            model: "gemini-2.0-flash".to_string(),
            messages: vec![
                ChatMessage::system("You are a translator."),
                ChatMessage::user("Translate this."),
            ],
        };

        assert_json_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gemini-2.0-flash",
                "messages": [
                    {"role": "system", "content": "You are a translator."},
                    {"role": "user", "content": "Translate this."}
                ]
            })
        );
    }

    #[test]
    fn test_final_output_from_response() {
        let response: ChatResponse = serde_json::from_value(json!({
            "id": "chatcmpl-123",
            "choices": [{
                "message": {"role": "assistant", "content": "Hola"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }))
        .unwrap();

        assert_eq!(response.final_output(), Some("Hola"));
        assert_eq!(response.usage.unwrap().total_tokens, 15);
        assert_eq!(response.id.as_deref(), Some("chatcmpl-123"));
    }

    #[test]
    fn test_final_output_missing_choices() {
        let response: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert_eq!(response.final_output(), None);
    }

    #[test]
    fn test_final_output_empty_content() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": ""}}]
        }))
        .unwrap();
        assert_eq!(response.final_output(), None);
    }
}
