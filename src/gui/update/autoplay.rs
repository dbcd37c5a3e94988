//! gui/update/autoplay.rs
//! Timer tick handling.

use std::time::Instant;

use iced::Task;
use tracing::trace;

use super::super::state::{Carousel, Message};
use super::navigation;

/// A tick from the subscription. The armed timer decides whether it counts,
/// so a tick queued before a pause does nothing.
pub(crate) fn auto_advance(state: &mut Carousel, at: Instant) -> Task<Message> {
    let due = state.autoplay.poll(at);
    trace!(due, "autoplay tick");

    // Whole laps land on the same slide; only the remainder matters.
    let steps = usize::try_from(due).unwrap_or(usize::MAX) % state.len().max(1);
    for _ in 0..steps {
        let _ = navigation::next(state);
    }

    Task::none()
}
