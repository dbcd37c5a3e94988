use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

const IMAGE_EXTS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Recursive image walk. Symlinks are not followed, so a link back into
/// the tree cannot repeat slides.
pub fn scan_images(root: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.with_context(|| format!("reading folder {}", root.display()))?;
        if entry.file_type().is_file() && is_image(entry.path()) {
            out.push(entry.into_path());
        }
    }

    Ok(out)
}

pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}
