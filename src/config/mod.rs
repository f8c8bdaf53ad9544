//! Gallery configuration management for `galdex.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                    |
//! |------------|--------------------------------------------|
//! | `[scan]`   | Image directory and extension allow-set    |
//! | `[inject]` | Target page and injected variable name     |
//!
//! # Example
//!
//! ```toml
//! [scan]
//! dir = "images"
//! extensions = ["png", "jpg", "jpeg", "gif", "webp"]
//!
//! [inject]
//! target = "index.html"
//! variable = "GALLERY_INDEX"
//! ```
//!
//! The config file is optional: without one, the defaults above apply, which
//! is the classic `images/` + `index.html` layout.

pub mod defaults;
mod error;
mod inject;
mod scan;

pub use inject::InjectConfig;
pub use scan::ScanConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing galdex.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct GalleryConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory (set after loading)
    #[serde(skip)]
    root: Option<PathBuf>,

    /// Scanner settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Injection settings
    #[serde(default)]
    pub inject: InjectConfig,
}

impl GalleryConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: GalleryConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        // Determine the final root path based on command
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                let base = cli
                    .root
                    .as_ref()
                    .cloned()
                    .unwrap_or_else(|| self.get_root().to_owned());
                base.join(name)
            }
            _ => cli
                .root
                .as_ref()
                .cloned()
                .unwrap_or_else(|| self.get_root().to_owned()),
        };

        self.set_root(&root);
        self.update_path_with_root(&root, cli);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, cli: &Cli) {
        // Apply CLI overrides first
        Self::update_option(&mut self.scan.dir, cli.images.as_ref());
        Self::update_option(&mut self.inject.target, cli.target.as_ref());

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Normalize scanner and injector paths
        self.scan.dir = Self::normalize_path(&root.join(&self.scan.dir));
        self.inject.target = Self::normalize_path(&root.join(&self.inject.target));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.scan.extensions.is_empty() {
            bail!(ConfigError::Validation(
                "[scan.extensions] must have at least one element".into()
            ));
        }

        if let Some(ext) = self.scan.extensions.iter().find(|e| e.starts_with('.')) {
            bail!(ConfigError::Validation(format!(
                "[scan.extensions] entries are bare suffixes, drop the dot in `{ext}`"
            )));
        }

        if !is_js_identifier(&self.inject.variable) {
            bail!(ConfigError::Validation(
                "[inject.variable] must be a valid JavaScript identifier".into()
            ));
        }

        Ok(())
    }
}

/// Check the injected global is assignable as `window.<name>`
fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
