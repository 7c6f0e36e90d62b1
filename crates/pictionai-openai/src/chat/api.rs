//! TextModel trait implementation for ChatClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{Message, ModelError, TextModel};

use super::client::{ChatClient, CHAT_API_URL};

#[async_trait]
impl TextModel for ChatClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, ModelError> {
        let body = self.build_request_body(messages);

        debug!(model = %self.config.model, "chat completion request");

        let response = self
            .http
            .post(CHAT_API_URL)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout
                } else {
                    ModelError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ModelError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ModelError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ModelError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}
