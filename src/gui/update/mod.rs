//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.
//!
//! Timer ticks and clicks go through the same path, and the autoplay timer is
//! re-synced after every message.

use std::time::Instant;

use iced::Task;

use super::state::{Carousel, Message};

mod autoplay;
mod navigation;

pub(crate) fn update(state: &mut Carousel, message: Message) -> Task<Message> {
    let task = match message {
        // Controls
        Message::Previous => navigation::previous(state),
        Message::Next => navigation::next(state),
        Message::TogglePlayPause => navigation::toggle_play_pause(state),

        // Indicators
        Message::GoTo(i) => navigation::go_to(state, i),

        // Timer
        Message::AutoAdvance(at) => autoplay::auto_advance(state, at),
    };

    state.sync_autoplay(Instant::now());
    task
}
