//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Galdex gallery index injector CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Image directory path (relative to project root)
    #[arg(short, long)]
    pub images: Option<PathBuf>,

    /// Target HTML file path (relative to project root)
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: galdex.toml)
    #[arg(short = 'C', long, default_value = "galdex.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scaffold a new gallery (image directory, starter page, config)
    Init {
        /// the name(path) of the gallery directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Scan the image directory and inject the index into the target page
    Inject,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
