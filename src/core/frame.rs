//! Render model: what the carousel shows for a given state.
//! The GUI turns a `Frame` into widgets; nothing here knows about iced.

use super::carousel::CarouselState;
use super::types::{CarouselConfig, Slide};

pub const PREV_GLYPH: &str = "<";
pub const NEXT_GLYPH: &str = ">";
pub const PLAY_GLYPH: &str = "▶";
pub const PAUSE_GLYPH: &str = "❚❚";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView<'a> {
    pub position: usize,
    pub alt: String,
    pub caption: Option<&'a str>,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Glyph reflects state: pause while playing, play while paused.
    pub play_pause_glyph: &'static str,
    pub is_playing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub target: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Every slide, in order. Exactly one is active unless the list is empty.
    pub slides: Vec<SlideView<'a>>,
    pub controls: Option<Controls>,
    pub indicators: Vec<Indicator>,
}

impl<'a> Frame<'a> {
    pub fn build(state: &CarouselState, slides: &'a [Slide], config: &CarouselConfig) -> Self {
        let views = slides
            .iter()
            .enumerate()
            .map(|(i, slide)| SlideView {
                position: i,
                alt: slide.alt_label(i),
                caption: slide.caption_text(),
                active: state.is_active(i),
            })
            .collect();

        let controls = config.show_controls.then(|| Controls {
            play_pause_glyph: if state.is_playing {
                PAUSE_GLYPH
            } else {
                PLAY_GLYPH
            },
            is_playing: state.is_playing,
        });

        let indicators = (0..slides.len())
            .map(|i| Indicator {
                target: i,
                active: state.is_active(i),
            })
            .collect();

        Self {
            slides: views,
            controls,
            indicators,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn active(&self) -> Option<&SlideView<'a>> {
        self.slides.iter().find(|s| s.active)
    }

    /// "2 / 4" style position label; `None` for an empty carousel.
    pub fn position_label(&self) -> Option<String> {
        self.active()
            .map(|s| format!("{} / {}", s.position + 1, self.slides.len()))
    }
}
