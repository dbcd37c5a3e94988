//! gui/update/navigation.rs
//! Prev / next / jump / play-pause.
//!
//! Thin wrappers over `CarouselState`; the wrap-around math lives in core.

use iced::Task;
use tracing::debug;

use super::super::state::{Carousel, Message};

pub(crate) fn next(state: &mut Carousel) -> Task<Message> {
    let len = state.len();
    state.state.go_to_next(len);
    debug!(index = state.state.current_index, "next");
    Task::none()
}

pub(crate) fn previous(state: &mut Carousel) -> Task<Message> {
    let len = state.len();
    state.state.go_to_previous(len);
    debug!(index = state.state.current_index, "previous");
    Task::none()
}

pub(crate) fn go_to(state: &mut Carousel, index: usize) -> Task<Message> {
    let len = state.len();
    if state.state.go_to_slide(index, len) {
        debug!(index, "jump");
    }
    Task::none()
}

pub(crate) fn toggle_play_pause(state: &mut Carousel) -> Task<Message> {
    state.state.toggle_play_pause();
    debug!(playing = state.state.is_playing, "play/pause");
    Task::none()
}
