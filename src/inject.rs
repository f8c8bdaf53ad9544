//! Marker-delimited index injection into the target page.
//!
//! The span between [`MARKER_START`] and [`MARKER_END`] is machine-owned:
//! it is fully rewritten on every run, everything around it is left alone.
//! On first run (no markers yet) a `<script>` element carrying the block is
//! inserted immediately before the `</head>` anchor.

use crate::{config::GalleryConfig, log, scan::scan_images};
use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};
use thiserror::Error;

/// Start marker of the machine-owned block
pub const MARKER_START: &str = "/* __GALLERY_INDEX_START__ */";
/// End marker of the machine-owned block
pub const MARKER_END: &str = "/* __GALLERY_INDEX_END__ */";
/// Insertion anchor used when no block exists yet
pub const ANCHOR: &str = "</head>";

/// Injector errors
#[derive(Debug, Error)]
pub enum InjectError {
    #[error("target file `{0}` not found")]
    TargetNotFound(PathBuf),

    #[error("no `{0}` anchor in target file, nowhere to insert the index block")]
    AnchorMissing(&'static str),
}

/// Matches an existing block, markers included. `(?s)` so the payload may
/// span lines, non-greedy so a single block is consumed.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(MARKER_START),
        regex::escape(MARKER_END)
    ))
    .unwrap()
});

/// Scan the image directory and rewrite the index block in the target page.
///
/// Any failure aborts before the target file is touched. Re-runs are
/// idempotent: an unchanged directory produces byte-identical output.
pub fn refresh_index(config: &GalleryConfig) -> Result<()> {
    let images = scan_images(&config.scan.dir, &config.scan.extensions)?;
    if images.is_empty() {
        log!("warn"; "no images found in `{}`", config.scan.dir.display());
    }

    inject_index(&config.inject.target, &images, &config.inject.variable)?;

    log!(
        "inject";
        "{} image(s) indexed into `{}`", images.len(), config.inject.target.display()
    );
    for name in &images {
        log!("inject"; "• {name}");
    }

    Ok(())
}

/// Rewrite `target` so it contains exactly one up-to-date index block.
pub fn inject_index(target: &Path, images: &[String], variable: &str) -> Result<()> {
    if !target.is_file() {
        return Err(InjectError::TargetNotFound(target.to_path_buf()).into());
    }

    let html = fs::read_to_string(target)
        .with_context(|| format!("Failed to read `{}`", target.display()))?;

    let block = build_block(images, variable)?;
    let html = splice_block(&html, &block)?;

    fs::write(target, html).with_context(|| format!("Failed to write `{}`", target.display()))
}

/// Render the marker-delimited assignment block.
///
/// The JSON array is compact and keeps non-ASCII filenames literal, so the
/// page reads exactly the names the filesystem holds.
fn build_block(images: &[String], variable: &str) -> Result<String> {
    let json = serde_json::to_string(images)?;
    Ok(format!("{MARKER_START}\nwindow.{variable} = {json};\n{MARKER_END}"))
}

/// Replace the existing block, or insert a fresh `<script>` element before
/// the anchor on first run.
///
/// `NoExpand` keeps `$` in filenames from being read as capture references.
fn splice_block(html: &str, block: &str) -> Result<String> {
    if BLOCK_RE.is_match(html) {
        return Ok(BLOCK_RE.replace(html, NoExpand(block)).into_owned());
    }

    if !html.contains(ANCHOR) {
        return Err(InjectError::AnchorMissing(ANCHOR).into());
    }

    let script = format!("<script>\n{block}\n</script>\n{ANCHOR}");
    Ok(html.replacen(ANCHOR, &script, 1))
}
