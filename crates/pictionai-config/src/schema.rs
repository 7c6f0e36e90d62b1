//! Configuration schema types for the Pictionar(ai) game.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the game shipped with.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Text model settings, used for both object generation and judging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextModelConfig {
    pub model: String,
    /// Completion token cap. Unset lets the API decide.
    pub max_tokens: Option<u32>,
    /// Sampling temperature in `[0, 2]`. Unset uses the API default.
    pub temperature: Option<f64>,
}

impl Default for TextModelConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".into(),
            max_tokens: None,
            temperature: None,
        }
    }
}

/// Image model settings, used to render the secret object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageModelConfig {
    pub model: String,
    pub size: String,
    pub quality: String,
}

impl Default for ImageModelConfig {
    fn default() -> Self {
        Self {
            model: "dall-e-3".into(),
            size: "1024x1024".into(),
            quality: "standard".into(),
        }
    }
}

/// Terminal UI behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Open each generated image in the system browser.
    pub open_images: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { open_images: true }
    }
}

/// Root configuration for the game.
///
/// All options have sensible defaults matching current behavior.
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PictionaiConfig {
    pub text: TextModelConfig,
    pub image: ImageModelConfig,
    pub ui: UiConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_text_settings() {
        let config = PictionaiConfig::default();
        assert_eq!(config.text.model, "gpt-3.5-turbo");
        assert!(config.text.max_tokens.is_none());
        assert!(config.text.temperature.is_none());
    }

    #[test]
    fn default_config_has_correct_image_settings() {
        let config = PictionaiConfig::default();
        assert_eq!(config.image.model, "dall-e-3");
        assert_eq!(config.image.size, "1024x1024");
        assert_eq!(config.image.quality, "standard");
    }

    #[test]
    fn default_config_opens_images() {
        let config = PictionaiConfig::default();
        assert!(config.ui.open_images);
    }

    #[test]
    fn partial_toml_fills_missing_fields_with_defaults() {
        let config: PictionaiConfig = toml::from_str(
            r#"
[text]
model = "gpt-4o-mini"

[image]
quality = "hd"
"#,
        )
        .unwrap();
        assert_eq!(config.text.model, "gpt-4o-mini");
        assert_eq!(config.image.quality, "hd");
        // Defaults preserved
        assert_eq!(config.image.size, "1024x1024");
        assert!(config.ui.open_images);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = PictionaiConfig {
            text: TextModelConfig {
                model: "gpt-4o".into(),
                max_tokens: Some(64),
                temperature: Some(1.2),
            },
            ..Default::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: PictionaiConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.text.model, "gpt-4o");
        assert_eq!(parsed.text.max_tokens, Some(64));
        assert!((parsed.text.temperature.unwrap() - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }
}
