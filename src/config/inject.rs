//! `[inject]` section configuration.
//!
//! Controls which page is rewritten and the name of the injected global.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[inject]` section in galdex.toml - page rewrite settings.
///
/// # Example
/// ```toml
/// [inject]
/// target = "gallery.html"
/// variable = "PHOTO_INDEX"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct InjectConfig {
    /// HTML file rewritten in place with the index block.
    #[serde(default = "defaults::inject::target")]
    #[educe(Default = defaults::inject::target())]
    pub target: PathBuf,

    /// Global variable the page reads, assigned as `window.<variable>`.
    #[serde(default = "defaults::inject::variable")]
    #[educe(Default = defaults::inject::variable())]
    pub variable: String,
}

#[cfg(test)]
mod tests {
    use super::super::GalleryConfig;
    use std::path::PathBuf;

    #[test]
    fn test_inject_config_full() {
        let config = r#"
            [inject]
            target = "gallery.html"
            variable = "PHOTO_INDEX"
        "#;
        let config = GalleryConfig::from_str(config).unwrap();

        assert_eq!(config.inject.target, PathBuf::from("gallery.html"));
        assert_eq!(config.inject.variable, "PHOTO_INDEX");
    }

    #[test]
    fn test_inject_config_defaults() {
        let config = GalleryConfig::from_str("").unwrap();

        assert_eq!(config.inject.target, PathBuf::from("index.html"));
        assert_eq!(config.inject.variable, "GALLERY_INDEX");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [inject]
            target = "index.html"
            backup = true
        "#;
        assert!(GalleryConfig::from_str(config).is_err());
    }
}
