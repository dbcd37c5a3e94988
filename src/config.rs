//! Host configuration: YAML file + command-line overrides.
//!
//! Produces what the GUI needs at boot: window title, slide list, `CarouselConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::types::{CarouselConfig, DEFAULT_INTERVAL, Slide};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct SlideEntry {
    pub source: PathBuf,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl From<SlideEntry> for Slide {
    fn from(e: SlideEntry) -> Self {
        Slide {
            source: e.source,
            alt_text: e.alt,
            caption: e.caption,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FileConfig {
    pub title: String,
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    pub show_controls: bool,
    pub slide_dirs: Vec<PathBuf>,
    pub slides: Vec<SlideEntry>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            title: "Image Carousel".to_string(),
            interval: DEFAULT_INTERVAL,
            show_controls: true,
            slide_dirs: Vec::new(),
            slides: Vec::new(),
        }
    }
}

impl FileConfig {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut cfg: Self = serde_yaml::from_str(&s)
            .with_context(|| format!("parsing config {}", path.display()))?;

        if let Some(base) = path.parent() {
            cfg.rebase(base);
        }
        Ok(cfg)
    }

    /// Relative paths in the file resolve against the file's folder.
    fn rebase(&mut self, base: &Path) {
        let paths = self
            .slide_dirs
            .iter_mut()
            .chain(self.slides.iter_mut().map(|e| &mut e.source));

        for path in paths {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Command-line values that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub images: Vec<PathBuf>,
    pub dirs: Vec<PathBuf>,
    pub interval_ms: Option<i64>,
    pub no_controls: bool,
}

/// Everything the GUI boots with.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub title: String,
    pub slides: Vec<Slide>,
    pub carousel: CarouselConfig,
}

impl Resolved {
    /// Slide order: configured slides, then positional images, then scanned folders.
    pub fn build(file: FileConfig, overrides: Overrides) -> Result<Self> {
        let mut carousel = CarouselConfig {
            show_controls: file.show_controls,
            ..CarouselConfig::default()
        }
        .with_interval(file.interval);
        if let Some(ms) = overrides.interval_ms {
            carousel = carousel.with_interval_ms(ms);
        }
        if overrides.no_controls {
            carousel.show_controls = false;
        }

        let mut slides: Vec<Slide> = file.slides.into_iter().map(Slide::from).collect();
        slides.extend(overrides.images.into_iter().map(Slide::new));

        let mut dirs = file.slide_dirs;
        dirs.extend(overrides.dirs);
        if !dirs.is_empty() {
            slides.extend(crate::core::scan_slides(&dirs).context("scanning slide folders")?);
        }

        Ok(Self {
            title: file.title,
            slides,
            carousel,
        })
    }
}
