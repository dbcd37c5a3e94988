//! Reusable small widgets.

use iced::widget::{column, container, text};
use iced::{Alignment, Length};

use super::super::state::Message;

/// Neutral stand-in for an empty slide list.
pub(crate) fn empty_placeholder(height: f32) -> iced::widget::Container<'static, Message> {
    container(
        column![text("▣").size(28), text("No slides to show").size(12)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .center_x(Length::Fill)
    .center_y(Length::Fill)
}
