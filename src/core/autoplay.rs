//! core/autoplay.rs
//! Autoplay timer lifecycle.
//!
//! The repeating timer is treated as a scoped resource:
//! - `Schedule` = the conditions the timer depends on (playing, slide count, interval)
//! - `Autoplay::sync` arms a fresh timer when the schedule changes, and disarms on `None`
//! - `Autoplay::poll` reports how many ticks are due; a disarmed timer never fires
//!
//! Time is always passed in, so tests can drive it with virtual instants.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::carousel::CarouselState;
use super::types::CarouselConfig;

/// Conditions governing the autoplay timer.
/// Two equal schedules mean "keep the running timer".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Schedule {
    pub period: Duration,
    pub slide_count: usize,
}

impl Schedule {
    /// `None` when nothing should tick: paused, no slides, or autoplay disabled.
    pub fn of(state: &CarouselState, config: &CarouselConfig, slide_count: usize) -> Option<Self> {
        if !state.is_playing || slide_count == 0 || !config.autoplay_enabled() {
            return None;
        }

        Some(Self {
            period: config.auto_advance_interval,
            slide_count,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    schedule: Schedule,
    deadline: Instant,
}

/// At most one armed timer at a time.
#[derive(Debug, Default)]
pub struct Autoplay {
    armed: Option<Armed>,
}

impl Autoplay {
    pub fn schedule(&self) -> Option<Schedule> {
        self.armed.map(|a| a.schedule)
    }

    /// Bring the timer in line with `schedule`.
    ///
    /// Unchanged schedule keeps the current window; anything else tears the
    /// old timer down first.
    pub fn sync(&mut self, schedule: Option<Schedule>, now: Instant) {
        if self.schedule() == schedule {
            return;
        }

        self.cancel();

        self.armed = schedule.map(|schedule| {
            debug!(?schedule, "autoplay timer armed");
            Armed {
                schedule,
                deadline: now + schedule.period,
            }
        });
    }

    /// Number of ticks due at `now`, saturating at `u32::MAX`.
    /// The deadline moves past `now` to the next period boundary.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(armed) = self.armed.as_mut() else {
            trace!("stale autoplay tick ignored");
            return 0;
        };

        if now < armed.deadline {
            return 0;
        }

        let period = armed.schedule.period.as_nanos().max(1);
        let due = (now - armed.deadline).as_nanos() / period + 1;

        // Next boundary strictly after `now`, or a fresh window if that overflows.
        let step = u64::try_from(due * period)
            .ok()
            .and_then(|ns| armed.deadline.checked_add(Duration::from_nanos(ns)));
        armed.deadline = step.unwrap_or(now + armed.schedule.period);

        u32::try_from(due).unwrap_or(u32::MAX)
    }

    /// Drop the armed timer, if any. Pending ticks are lost.
    pub fn cancel(&mut self) {
        if let Some(old) = self.armed.take() {
            debug!(schedule = ?old.schedule, "autoplay timer released");
        }
    }
}
