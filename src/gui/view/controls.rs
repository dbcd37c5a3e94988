//! Prev / play-pause / next row, and the indicator dots.

use iced::widget::{Row, button, row, text};
use iced::{Alignment, Length, Theme};

use super::super::state::Message;
use super::constants::{CONTROL_TEXT, CONTROL_W, INDICATOR_SPACING, INDICATOR_TEXT};
use crate::core::frame::{Controls, Frame, NEXT_GLYPH, PREV_GLYPH};

pub(crate) fn build_controls<'a>(controls: Controls) -> Row<'a, Message> {
    let control = |glyph: &'static str, msg: Message| {
        button(text(glyph).size(CONTROL_TEXT))
            .width(Length::Fixed(CONTROL_W))
            .on_press(msg)
    };

    // Paused: make the play button stand out.
    let play_style: fn(&Theme, button::Status) -> button::Style = if controls.is_playing {
        button::secondary
    } else {
        button::primary
    };

    row![
        control(PREV_GLYPH, Message::Previous).style(button::secondary),
        control(controls.play_pause_glyph, Message::TogglePlayPause).style(play_style),
        control(NEXT_GLYPH, Message::Next).style(button::secondary),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
}

pub(crate) fn build_indicators<'a>(frame: &Frame<'_>) -> Row<'a, Message> {
    let mut dots = row![].spacing(INDICATOR_SPACING);

    for ind in &frame.indicators {
        let (glyph, style): (&str, fn(&Theme, button::Status) -> button::Style) = if ind.active {
            ("●", button::primary)
        } else {
            ("○", button::text)
        };

        dots = dots.push(
            button(text(glyph).size(INDICATOR_TEXT))
                .padding([2, 6])
                .style(style)
                .on_press(Message::GoTo(ind.target)),
        );
    }

    dots.align_y(Alignment::Center)
}
