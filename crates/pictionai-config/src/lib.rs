//! Pictionar(ai) configuration system.
//!
//! Provides TOML-based configuration for the game's text model, image
//! model, and terminal UI, with full validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pictionai_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.text.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{
    ImageModelConfig, PictionaiConfig, TextModelConfig, UiConfig, CONFIG_SCHEMA_VERSION,
};

use pictionai_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<PictionaiConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
