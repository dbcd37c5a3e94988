//! GUI state + messages.
//! Pure data definitions used by update + view.

use std::time::Instant;

use iced::widget::image;

use crate::config::Resolved;
use crate::core::autoplay::{Autoplay, Schedule};
use crate::core::carousel::CarouselState;
use crate::core::frame::Frame;
use crate::core::types::{CarouselConfig, Slide};

/// App state
pub(crate) struct Carousel {
    pub title: String,

    // Host-supplied, fixed for the life of the window
    pub slides: Vec<Slide>,
    pub config: CarouselConfig,

    /// One handle per slide, created once so transitions never reload images.
    pub handles: Vec<image::Handle>,

    pub state: CarouselState,
    pub autoplay: Autoplay,
}

impl Carousel {
    pub(crate) fn new(resolved: Resolved) -> Self {
        let handles = resolved
            .slides
            .iter()
            .map(|s| image::Handle::from_path(&s.source))
            .collect();

        let mut carousel = Self {
            title: resolved.title,
            slides: resolved.slides,
            config: resolved.carousel,
            handles,
            state: CarouselState::default(),
            autoplay: Autoplay::default(),
        };
        carousel.sync_autoplay(Instant::now());
        carousel
    }

    pub(crate) fn len(&self) -> usize {
        self.slides.len()
    }

    pub(crate) fn schedule(&self) -> Option<Schedule> {
        Schedule::of(&self.state, &self.config, self.len())
    }

    /// Re-arm or release the timer to match the current state.
    pub(crate) fn sync_autoplay(&mut self, now: Instant) {
        let schedule = self.schedule();
        self.autoplay.sync(schedule, now);
    }

    pub(crate) fn frame(&self) -> Frame<'_> {
        Frame::build(&self.state, &self.slides, &self.config)
    }

    pub(crate) fn window_title(&self) -> String {
        match self.frame().position_label() {
            Some(pos) => format!("{} ({pos})", self.title),
            None => self.title.clone(),
        }
    }
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Controls
    Previous,
    Next,
    TogglePlayPause,

    // Indicators
    GoTo(usize),

    // Timer
    AutoAdvance(Instant),
}
