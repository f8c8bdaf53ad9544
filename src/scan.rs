//! Image directory scanning.
//!
//! Collects the filenames that end up in the injected index: direct entries
//! only, filtered by the configured extension allow-set, sorted ascending.

use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Scanner errors
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("image directory `{0}` not found")]
    DirNotFound(PathBuf),
}

/// Collect image filenames from the direct entries of `dir`.
///
/// Extension comparison is case-insensitive: the file suffix is lower-cased
/// before matching, so `PHOTO.PNG` passes a `png` allow-set. Subdirectories
/// are not descended into. The result is sorted so re-runs are deterministic.
pub fn scan_images(dir: &Path, extensions: &[String]) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(ScanError::DirNotFound(dir.to_path_buf()).into());
    }

    let mut images: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| has_allowed_extension(e.path(), extensions))
        .filter_map(|e| e.file_name().to_str().map(str::to_owned))
        .collect();

    images.sort();
    Ok(images)
}

/// Check whether the file extension, lower-cased, is in the allow-set.
fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(&ext)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn default_extensions() -> Vec<String> {
        ["png", "jpg", "jpeg", "gif", "webp"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_scan_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("no-such-dir");

        let result = scan_images(&missing, &default_extensions());
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "b.jpg");
        touch(tmp.path(), "a.png");
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "script.js");

        let images = scan_images(tmp.path(), &default_extensions()).unwrap();
        assert_eq!(images, vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn test_scan_case_insensitive_extensions() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "UPPER.PNG");
        touch(tmp.path(), "mixed.JpEg");

        let images = scan_images(tmp.path(), &default_extensions()).unwrap();
        assert_eq!(images, vec!["UPPER.PNG", "mixed.JpEg"]);
    }

    #[test]
    fn test_scan_skips_subdirectories() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "top.png");
        // A directory named like an image must not be listed, nor descended into
        fs::create_dir(tmp.path().join("folder.png")).unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "deep.png");

        let images = scan_images(tmp.path(), &default_extensions()).unwrap();
        assert_eq!(images, vec!["top.png"]);
    }

    #[test]
    fn test_scan_empty_dir() {
        let tmp = TempDir::new().unwrap();

        let images = scan_images(tmp.path(), &default_extensions()).unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn test_scan_no_extension_files_excluded() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "README");
        touch(tmp.path(), ".hidden");
        touch(tmp.path(), "ok.webp");

        let images = scan_images(tmp.path(), &default_extensions()).unwrap();
        assert_eq!(images, vec!["ok.webp"]);
    }
}
