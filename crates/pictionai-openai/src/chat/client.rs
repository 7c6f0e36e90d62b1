//! Chat completions client struct, request building, and response parsing.

use crate::{Message, ModelError};

use super::config::ChatConfig;

pub(crate) const CHAT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat completions API client.
pub struct ChatClient {
    pub(crate) config: ChatConfig,
    pub(crate) http: reqwest::Client,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Build the JSON request body for the chat completions API.
    ///
    /// `max_tokens` and `temperature` are only included when configured;
    /// the API applies its own defaults otherwise.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let messages: Vec<_> = messages
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role,
                    "content": msg.content,
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "model": self.config.model,
            "messages": messages,
        });

        if let Some(max_tokens) = self.config.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }
        if let Some(temperature) = self.config.temperature {
            body["temperature"] = serde_json::json!(temperature);
        }

        body
    }

    /// Parse a chat completion response into its trimmed message content.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, ModelError> {
        let choices = json["choices"]
            .as_array()
            .ok_or_else(|| ModelError::ParseError("no choices in response".to_string()))?;

        let first = choices
            .first()
            .ok_or_else(|| ModelError::ParseError("empty choices".to_string()))?;

        let content = first["message"]["content"]
            .as_str()
            .ok_or_else(|| ModelError::ParseError("no message content in response".to_string()))?;

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn client() -> ChatClient {
        ChatClient::new(ChatConfig::new("test-key"))
    }

    #[test]
    fn request_body_includes_model_and_messages() {
        let messages = [
            Message {
                role: Role::System,
                content: "You are an assistant.".into(),
            },
            Message {
                role: Role::User,
                content: "Name an object.".into(),
            },
        ];
        let body = client().build_request_body(&messages);
        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are an assistant.");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Name an object.");
        assert!(body.get("max_tokens").is_none());
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn request_body_includes_optional_sampling_settings() {
        let config = ChatConfig::new("test-key")
            .with_max_tokens(64)
            .with_temperature(1.2);
        let body = ChatClient::new(config).build_request_body(&[]);
        assert_eq!(body["max_tokens"], 64);
        assert_eq!(body["temperature"], 1.2);
    }

    #[test]
    fn parse_response_extracts_trimmed_content() {
        let json = serde_json::json!({
            "id": "chatcmpl-123",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "\n\nA vintage typewriter.  " },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25 }
        });
        assert_eq!(client().parse_response(json).unwrap(), "A vintage typewriter.");
    }

    #[test]
    fn parse_response_without_choices_is_an_error() {
        let result = client().parse_response(serde_json::json!({ "error": "nope" }));
        assert!(matches!(result, Err(ModelError::ParseError(_))));
    }

    #[test]
    fn parse_response_with_empty_choices_is_an_error() {
        let result = client().parse_response(serde_json::json!({ "choices": [] }));
        assert!(matches!(result, Err(ModelError::ParseError(_))));
    }
}
