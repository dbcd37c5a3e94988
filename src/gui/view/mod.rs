//! GUI renderer (reads state, produces widgets; no mutation).

pub(crate) mod constants;
mod controls;
mod stage;
mod widgets;

use iced::widget::{Column, column, text};
use iced::{Alignment, Length};

use super::state::{Carousel, Message};
use constants::{STAGE_H, STATUS_TEXT, TITLE_TEXT};

pub(crate) fn view(state: &Carousel) -> Column<'_, Message> {
    let frame = state.frame();
    let heading = text(&state.title).size(TITLE_TEXT);

    if frame.is_empty() {
        return column![heading, widgets::empty_placeholder(STAGE_H)]
            .spacing(12)
            .padding(12)
            .width(Length::Fill)
            .align_x(Alignment::Center);
    }

    let mut col = column![
        heading,
        stage::build_stage(state, &frame).height(Length::Fixed(STAGE_H)),
        stage::build_caption(&frame),
    ]
    .spacing(12);

    if let Some(controls) = frame.controls {
        col = col.push(controls::build_controls(controls));
    }

    col.push(controls::build_indicators(&frame))
        .push(text(frame.position_label().unwrap_or_default()).size(STATUS_TEXT))
        .padding(12)
        .width(Length::Fill)
        .align_x(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::Resolved;
    use crate::core::types::{CarouselConfig, Slide};

    fn carousel(n: usize) -> Carousel {
        Carousel::new(Resolved {
            title: "Anime Characters".into(),
            slides: (0..n)
                .map(|i| Slide::new(PathBuf::from(format!("/images/{i}.png"))))
                .collect(),
            carousel: CarouselConfig::default(),
        })
    }

    #[test]
    fn heading_renders_with_and_without_slides() {
        for n in [0, 3] {
            let c = carousel(n);
            let _ = view(&c);
            assert_eq!(c.title, "Anime Characters");
        }
    }
}
