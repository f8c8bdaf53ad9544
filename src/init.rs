//! Gallery scaffolding.
//!
//! Creates a new gallery structure with default configuration and a starter
//! page that already carries the injection anchor.

use crate::{config::GalleryConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "galdex.toml";

/// Starter page: carries the `</head>` anchor and renders the injected
/// index into an image grid when opened over `file://`.
const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Gallery</title>
<style>
main { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 8px; }
main img { width: 100%; height: auto; display: block; }
</style>
</head>
<body>
<main id="gallery"></main>
<script>
const index = window.GALLERY_INDEX || [];
const gallery = document.getElementById("gallery");
for (const name of index) {
  const img = document.createElement("img");
  img.src = `images/${name}`;
  img.loading = "lazy";
  gallery.appendChild(img);
}
</script>
</body>
</html>
"#;

/// Create a new gallery with default structure
pub fn new_gallery(config: &GalleryConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `galdex init <NAME>` to create in a subdirectory."
        );
    }

    init_image_dir(config)?;
    init_default_config(root)?;
    init_starter_page(config)?;

    log!("init"; "new gallery ready at `{}`", root.display());
    log!("init"; "drop images into `{}` and run `galdex inject`", config.scan.dir.display());

    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Create the image directory
fn init_image_dir(config: &GalleryConfig) -> Result<()> {
    let path = &config.scan.dir;
    if path.exists() {
        bail!(
            "Path `{}` already exists. Try `galdex init <NAME>` instead.",
            path.display()
        );
    }
    fs::create_dir_all(path).with_context(|| format!("Failed to create {}", path.display()))
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&GalleryConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Write the starter page carrying the injection anchor
fn init_starter_page(config: &GalleryConfig) -> Result<()> {
    let path = &config.inject.target;
    if path.exists() {
        bail!("Path `{}` already exists.", path.display());
    }
    fs::write(path, INDEX_TEMPLATE)
        .with_context(|| format!("Failed to create {}", path.display()))
}
