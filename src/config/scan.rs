//! `[scan]` section configuration.
//!
//! Controls which directory is scanned and which file extensions count as
//! images.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[scan]` section in galdex.toml - image discovery settings.
///
/// # Example
/// ```toml
/// [scan]
/// dir = "photos"
/// extensions = ["png", "webp"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory scanned for image files (direct entries only).
    #[serde(default = "defaults::scan::dir")]
    #[educe(Default = defaults::scan::dir())]
    pub dir: PathBuf,

    /// Extension allow-set, matched case-insensitively, without dots.
    #[serde(default = "defaults::scan::extensions")]
    #[educe(Default = defaults::scan::extensions())]
    pub extensions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::GalleryConfig;
    use std::path::PathBuf;

    #[test]
    fn test_scan_config_full() {
        let config = r#"
            [scan]
            dir = "artwork"
            extensions = ["png", "avif"]
        "#;
        let config = GalleryConfig::from_str(config).unwrap();

        assert_eq!(config.scan.dir, PathBuf::from("artwork"));
        assert_eq!(config.scan.extensions, vec!["png", "avif"]);
    }

    #[test]
    fn test_scan_config_defaults() {
        let config = GalleryConfig::from_str("").unwrap();

        assert_eq!(config.scan.dir, PathBuf::from("images"));
        assert_eq!(
            config.scan.extensions,
            vec!["png", "jpg", "jpeg", "gif", "webp"]
        );
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [scan]
            dir = "images"
            recursive = true
        "#;
        let result = GalleryConfig::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
