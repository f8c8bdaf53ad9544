//! Galdex - a static image index injector for gallery pages.

mod cli;
mod config;
mod init;
mod inject;
mod logger;
mod scan;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::GalleryConfig;
use init::new_gallery;
use inject::refresh_index;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Init { name } => new_gallery(&config, name.is_some()),
        Commands::Inject => refresh_index(&config),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<GalleryConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        GalleryConfig::from_path(&config_path)?
    } else {
        GalleryConfig::default()
    };
    config.update_with_cli(cli);

    if cli.is_init() && config.config_path.exists() {
        bail!("Config file already exists. Remove it manually or init in a different path.")
    }

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}
