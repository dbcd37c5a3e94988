//! gui/subscription.rs
//! The autoplay timer: a periodic AutoAdvance message while a schedule is armed.
//!
//! iced keeps a subscription alive only while `subscription()` keeps returning
//! it with the same identity. Keying it by the schedule means a pause, a new
//! interval or a new slide count drops the old timer and starts a fresh one.

use iced::{Subscription, time};

use super::state::{Carousel, Message};

pub(crate) fn subscription(state: &Carousel) -> Subscription<Message> {
    let Some(schedule) = state.autoplay.schedule() else {
        return Subscription::none();
    };

    time::every(schedule.period)
        .with(schedule.slide_count)
        .map(|(_, at)| Message::AutoAdvance(at))
}
