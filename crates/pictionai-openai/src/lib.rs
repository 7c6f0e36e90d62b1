//! OpenAI API clients for Pictionar(ai).
//!
//! Provides a chat completions client (object generation and guess
//! judging) and an image generation client (rendering the secret
//! object). Both sit behind small traits so the game logic can run
//! against fakes in tests.

pub mod chat;
pub mod images;

use async_trait::async_trait;

pub use chat::{ChatClient, ChatConfig};
pub use images::{ImageClient, ImageConfig};

/// Chat-style text model: takes a conversation, returns the reply text.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, ModelError>;
}

/// Text-to-image model: takes a prompt, returns a hosted image URL.
#[async_trait]
pub trait ImageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}
