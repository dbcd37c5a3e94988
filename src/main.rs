//! Image carousel
//!
//! # What this program is
//! A small desktop app (built with the `iced` GUI library) that shows a fixed list of
//! images one at a time, advances on a timer, and lets you step, jump, or pause.
//!
//! # How it fits together
//! - `core` = the carousel itself: slide data, index/play state, autoplay timer, render model
//! - `gui`  = iced glue: `Carousel` state, `Message`, `update`, `view`, `subscription`
//! - `config` + this file = the host: CLI, YAML config, slide discovery, logging
//!
//! The iced loop repeats forever:
//! **Message happens -> update changes state -> view redraws**
//!
//! # Timer model
//! - While playing, `subscription()` returns a repeating timer keyed by its schedule.
//! - Pause, a new interval, or a new slide count changes the key, so iced drops the
//!   old timer and starts a fresh one.
//! - Ticks and clicks both arrive as messages, so index updates never interleave.

mod config;
mod core;
mod gui;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{FileConfig, Overrides, Resolved};
use crate::gui::view::constants::{WINDOW_H, WINDOW_W};
use crate::gui::{Carousel, subscription, update, view};

#[derive(Debug, Parser)]
#[command(name = "carousel", about = "Auto-advancing image carousel")]
struct Cli {
    /// Image files to show, in order
    #[arg(value_name = "IMAGES")]
    images: Vec<PathBuf>,

    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Folder to scan for images (repeatable)
    #[arg(short, long = "dir", value_name = "DIR")]
    dirs: Vec<PathBuf>,

    /// Autoplay interval override (ms); zero or negative disables autoplay
    #[arg(long, value_name = "MILLIS", allow_negative_numbers = true)]
    interval_ms: Option<i64>,

    /// Hide the prev / play-pause / next controls
    #[arg(long)]
    no_controls: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            images: self.images.clone(),
            dirs: self.dirs.clone(),
            interval_ms: self.interval_ms,
            no_controls: self.no_controls,
        }
    }
}

fn init_tracing(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("carousel={level}").parse()?)
        .add_directive("wgpu=warn".parse()?)
        .add_directive("iced_wgpu=warn".parse()?)
        .add_directive("winit=warn".parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let file = match &cli.config {
        Some(path) => FileConfig::from_yaml_file(path)?,
        None => FileConfig::default(),
    };
    let resolved = Resolved::build(file, cli.overrides()).context("resolving slides")?;

    info!(
        slides = resolved.slides.len(),
        interval = ?resolved.carousel.auto_advance_interval,
        show_controls = resolved.carousel.show_controls,
        "starting carousel"
    );
    if resolved.slides.is_empty() {
        warn!("no slides configured; showing an empty carousel");
    }

    iced::application(move || Carousel::new(resolved.clone()), update, view)
        .title(Carousel::window_title)
        .subscription(subscription)
        .window_size((WINDOW_W, WINDOW_H))
        .run()
        .map_err(|e| anyhow!("carousel window failed: {e}"))
}
