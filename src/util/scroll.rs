//! Sticky navbar and scroll-up button state, plus the debounce used to
//! coalesce scroll events.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::cell::RefCell;
use std::time::Duration;

use crate::config::ScrollConfig;
use crate::util::scheduler::Scheduler;

/// Classes the page chrome toggles for a given scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollChrome {
    pub sticky: bool,
    pub show_scroll_up: bool,
}

impl ScrollChrome {
    /// Both thresholds are strict: exactly at the offset is still "above".
    #[must_use]
    pub fn at(offset: f64, config: &ScrollConfig) -> Self {
        Self {
            sticky: offset > config.sticky_offset,
            show_scroll_up: offset > config.scroll_up_offset,
        }
    }
}

/// Trailing-edge debounce: only the last trigger in a burst runs.
///
/// At most one timer is outstanding. A new trigger drops the previous timer,
/// which cancels it.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: RefCell<Option<S::Timer>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: RefCell::new(None),
        }
    }

    /// Cancel the pending run, if any, and schedule `task` a full delay out.
    pub fn trigger(&self, task: impl FnOnce() + 'static) {
        drop(self.pending.take());
        let timer = self.scheduler.schedule(self.delay, Box::new(task));
        *self.pending.borrow_mut() = Some(timer);
    }
}
