use clap::Parser;

/// Pictionar(ai): guess the object behind an AI-generated image.
#[derive(Parser, Debug)]
#[command(name = "pictionai", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Do not open generated images in the browser.
    #[arg(long)]
    pub no_open: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
