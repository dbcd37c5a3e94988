//! core/mod.rs
//!
//! The brain of the carousel:
//! - Slide + config data types
//! - Carousel state and its pure transitions
//! - Autoplay timer lifecycle
//! - Render model (`Frame`) the GUI draws from
//! - Discover image files for the host (filesystem walk)
//!
//! Nothing in here touches iced, so everything is testable without a window.

pub mod autoplay;
pub mod carousel;
pub mod frame;
pub mod library;
pub mod types;

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;

use types::Slide;

/// Discover images under multiple roots.
///
/// - De-dupes across overlapping roots by full path
/// - Sorts paths once (core owns ordering, GUI shouldn't)
pub fn scan_paths(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut out: Vec<PathBuf> = Vec::new();

    for root in roots {
        for path in library::scan_images(root)? {
            if seen.insert(path.clone()) {
                out.push(path);
            }
        }
    }

    out.sort();
    Ok(out)
}

/// Turn scanned folders into plain slides (no alt text, no caption).
pub fn scan_slides(roots: &[PathBuf]) -> Result<Vec<Slide>> {
    Ok(scan_paths(roots)?.into_iter().map(Slide::new).collect())
}
