//! Deferred callbacks and awaitable delays.
//!
//! Everything that waits (status auto-hide, scroll debounce, request
//! timeouts, the typed-text loop) goes through [`Scheduler`] so the logic can
//! be driven by a manual clock in tests and by `gloo-timers` in the browser.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::future::Future;
use std::time::Duration;

/// Source of timers for single-threaded browser code.
pub trait Scheduler {
    /// Future returned by [`Scheduler::sleep`].
    type Sleep: Future<Output = ()>;

    /// Pending task returned by [`Scheduler::schedule`]. Dropping it before
    /// the deadline cancels the task.
    type Timer;

    /// Run `task` once after `delay`. The task cannot be cancelled; callers
    /// that need supersession compare a generation on wake-up.
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>);

    /// Run `task` once after `delay` unless the returned timer is dropped
    /// first.
    #[must_use]
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Timer;

    /// Resolve after `delay`.
    fn sleep(&self, delay: Duration) -> Self::Sleep;
}

/// `setTimeout`-backed scheduler.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Sleep = gloo_timers::future::TimeoutFuture;
    type Timer = gloo_timers::callback::Timeout;

    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        // Leaks one closure per call; only used for user-paced events.
        self.schedule(delay, task).forget();
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Timer {
        gloo_timers::callback::Timeout::new(millis(delay), task)
    }

    fn sleep(&self, delay: Duration) -> Self::Sleep {
        gloo_timers::future::TimeoutFuture::new(millis(delay))
    }
}

/// Whole milliseconds for `setTimeout`, clamped to `i32::MAX`.
///
/// `gloo-timers` takes a `u32` but hands it to the browser as a signed 32-bit
/// delay, so anything larger would wrap negative and fire at once.
#[must_use]
pub fn millis(delay: Duration) -> u32 {
    i32::try_from(delay.as_millis()).map_or(i32::MAX.unsigned_abs(), i32::unsigned_abs)
}
