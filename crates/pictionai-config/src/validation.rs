//! Full configuration validation.
//!
//! Checks model settings against the values the APIs accept and collects
//! all errors into a single `ConfigError`.

use crate::schema::PictionaiConfig;
use pictionai_common::ConfigError;

/// Image sizes the generation endpoint accepts.
const IMAGE_SIZES: [&str; 3] = ["1024x1024", "1792x1024", "1024x1792"];

/// Image quality tiers the generation endpoint accepts.
const IMAGE_QUALITIES: [&str; 2] = ["standard", "hd"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PictionaiConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_text(&mut errors, config);
    validate_image(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Validate text model constraints.
fn validate_text(errors: &mut Vec<String>, config: &PictionaiConfig) {
    if config.text.model.trim().is_empty() {
        errors.push("text.model must not be empty".into());
    }
    if let Some(max_tokens) = config.text.max_tokens {
        if max_tokens == 0 {
            errors.push("text.max_tokens = 0 must be at least 1".into());
        }
    }
    if let Some(temperature) = config.text.temperature {
        if !(0.0..=2.0).contains(&temperature) {
            errors.push(format!(
                "text.temperature = {temperature} is out of range [0, 2]"
            ));
        }
    }
}

/// Validate image model constraints.
fn validate_image(errors: &mut Vec<String>, config: &PictionaiConfig) {
    if config.image.model.trim().is_empty() {
        errors.push("image.model must not be empty".into());
    }
    if !IMAGE_SIZES.contains(&config.image.size.as_str()) {
        errors.push(format!(
            "image.size = \"{}\" is not one of {IMAGE_SIZES:?}",
            config.image.size
        ));
    }
    if !IMAGE_QUALITIES.contains(&config.image.quality.as_str()) {
        errors.push(format!(
            "image.quality = \"{}\" is not one of {IMAGE_QUALITIES:?}",
            config.image.quality
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PictionaiConfig;

    #[test]
    fn default_config_is_valid() {
        let config = PictionaiConfig::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn bad_image_size_is_rejected() {
        let mut config = PictionaiConfig::default();
        config.image.size = "512x512".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("image.size"));
    }

    #[test]
    fn bad_quality_is_rejected() {
        let mut config = PictionaiConfig::default();
        config.image.quality = "ultra".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("image.quality"));
    }

    #[test]
    fn temperature_out_of_range_is_rejected() {
        let mut config = PictionaiConfig::default();
        config.text.temperature = Some(2.5);
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("text.temperature"));
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        let mut config = PictionaiConfig::default();
        config.text.max_tokens = Some(0);
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("text.max_tokens"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = PictionaiConfig::default();
        config.text.model = "  ".into();
        config.image.size = "tiny".into();
        config.image.quality = "ultra".into();
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("text.model"));
        assert!(msg.contains("image.size"));
        assert!(msg.contains("image.quality"));
        assert_eq!(msg.matches("; ").count(), 2);
    }
}
