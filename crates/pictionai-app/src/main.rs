mod cli;
mod ui;

use pictionai_common::PictionaiError;
use pictionai_config::PictionaiConfig;
use pictionai_openai::{ChatClient, ChatConfig, ImageClient, ImageConfig};
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    // Try common locations for .env relative to the workspace
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root, two levels up from crates/pictionai-app/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env before anything else so OPENAI_API_KEY can come from it
    load_dotenv();

    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("pictionai=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "pictionai=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Pictionar(ai) v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args).await {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: cli::Args) -> pictionai_common::Result<()> {
    // Load config
    let config = match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {path}");
            let config =
                pictionai_config::toml_loader::load_from_path(std::path::Path::new(path))?;
            pictionai_config::validation::validate(&config)?;
            config
        }
        None => pictionai_config::load_config()?,
    };

    // Both clients share the one API key from the environment
    let text = ChatClient::new(chat_config(&config)?);
    let images = ImageClient::new(image_config(&config)?);

    let open_images = config.ui.open_images && !args.no_open;

    ui::run(&text, &images, open_images).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn chat_config(config: &PictionaiConfig) -> pictionai_common::Result<ChatConfig> {
    let mut chat = ChatConfig::from_env()
        .map_err(|e| PictionaiError::Model(e.to_string()))?
        .with_model(config.text.model.clone());
    if let Some(max_tokens) = config.text.max_tokens {
        chat = chat.with_max_tokens(max_tokens);
    }
    if let Some(temperature) = config.text.temperature {
        chat = chat.with_temperature(temperature);
    }
    Ok(chat)
}

fn image_config(config: &PictionaiConfig) -> pictionai_common::Result<ImageConfig> {
    Ok(ImageConfig::from_env()
        .map_err(|e| PictionaiError::Model(e.to_string()))?
        .with_model(config.image.model.clone())
        .with_size(config.image.size.clone())
        .with_quality(config.image.quality.clone()))
}
