//! OpenAI image generation API client.
//!
//! Renders the secret object as a picture and returns the hosted URL
//! for the result.

use async_trait::async_trait;
use tracing::debug;

use crate::{ImageModel, ModelError};

const IMAGES_API_URL: &str = "https://api.openai.com/v1/images/generations";

/// Image generation API client configuration.
#[derive(Clone)]
pub struct ImageConfig {
    pub api_key: String,
    pub model: String,
    pub size: String,
    pub quality: String,
}

impl std::fmt::Debug for ImageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("size", &self.size)
            .field("quality", &self.quality)
            .finish()
    }
}

impl ImageConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "dall-e-3".to_string(),
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
        }
    }

    /// Create config from the environment.
    ///
    /// Reads `OPENAI_API_KEY`. The application loads `.env` files before
    /// calling this, so a key placed there works too.
    pub fn from_env() -> Result<Self, ModelError> {
        match std::env::var("OPENAI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(ModelError::ApiError(
                "OpenAI API not configured. Set OPENAI_API_KEY in the \
                 environment or in a .env file."
                    .into(),
            )),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = quality.into();
        self
    }
}

/// Image generation client.
pub struct ImageClient {
    config: ImageConfig,
    http: reqwest::Client,
}

impl ImageClient {
    pub fn new(config: ImageConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Build the JSON request body for the image generation API.
    ///
    /// Always requests a single image; the game shows exactly one
    /// picture per round.
    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "n": 1,
            "size": self.config.size,
            "quality": self.config.quality,
        })
    }

    /// Parse an image generation response into the first image URL.
    fn parse_response(&self, json: serde_json::Value) -> Result<String, ModelError> {
        json["data"][0]["url"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| ModelError::ParseError("no image url in response".to_string()))
    }
}

#[async_trait]
impl ImageModel for ImageClient {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let body = self.build_request_body(prompt);

        debug!(
            model = %self.config.model,
            size = %self.config.size,
            "image generation request"
        );

        let response = self
            .http
            .post(IMAGES_API_URL)
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
