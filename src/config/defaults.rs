//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [scan] Section Defaults
// ============================================================================

pub mod scan {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "images".into()
    }

    pub fn extensions() -> Vec<String> {
        ["png", "jpg", "jpeg", "gif", "webp"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

// ============================================================================
// [inject] Section Defaults
// ============================================================================

pub mod inject {
    use std::path::PathBuf;

    pub fn target() -> PathBuf {
        "index.html".into()
    }

    pub fn variable() -> String {
        "GALLERY_INDEX".into()
    }
}
