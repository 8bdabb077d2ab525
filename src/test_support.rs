//! In-memory fakes for the traits behavior modules are written against.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::form::status::{StatusStyle, StatusSurface};
use crate::util::scheduler::Scheduler;
use crate::util::theme::PreferenceStore;

type Task = Box<dyn FnOnce()>;

/// Scheduler driven by [`ManualScheduler::advance`].
///
/// Sleeps resolve immediately; deferred tasks wait for the clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    now: Rc<Cell<Duration>>,
    queue: Rc<RefCell<Vec<(Duration, u64, Task)>>>,
    seq: Rc<Cell<u64>>,
    sleeps: Rc<RefCell<Vec<Duration>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }

    /// Move the clock forward, running every task that comes due in order.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _, _))| *at <= target)
                    .min_by_key(|(_, (at, seq, _))| (*at, *seq))
                    .map(|(idx, _)| idx);
                due.map(|idx| queue.remove(idx))
            };
            let Some((at, _, task)) = next else {
                break;
            };
            self.now.set(at);
            task();
        }
        self.now.set(target);
    }
}

impl ManualScheduler {
    fn enqueue(&self, delay: Duration, task: Task) -> u64 {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().push((self.now.get() + delay, seq, task));
        seq
    }
}

/// Handle from [`ManualScheduler::schedule`]; dropping it unqueues the task.
pub struct ManualTimer {
    seq: u64,
    queue: Rc<RefCell<Vec<(Duration, u64, Task)>>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        self.queue.borrow_mut().retain(|(_, seq, _)| *seq != self.seq);
    }
}

impl Scheduler for ManualScheduler {
    type Sleep = std::future::Ready<()>;
    type Timer = ManualTimer;

    fn defer(&self, delay: Duration, task: Task) {
        self.enqueue(delay, task);
    }

    fn schedule(&self, delay: Duration, task: Task) -> Self::Timer {
        ManualTimer {
            seq: self.enqueue(delay, task),
            queue: Rc::clone(&self.queue),
        }
    }

    fn sleep(&self, delay: Duration) -> Self::Sleep {
        self.sleeps.borrow_mut().push(delay);
        std::future::ready(())
    }
}

/// Scheduler whose sleeps never resolve.
#[derive(Clone, Default)]
pub struct NeverScheduler {
    pub inner: ManualScheduler,
}

impl Scheduler for NeverScheduler {
    type Sleep = std::future::Pending<()>;
    type Timer = ManualTimer;

    fn defer(&self, delay: Duration, task: Task) {
        self.inner.defer(delay, task);
    }

    fn schedule(&self, delay: Duration, task: Task) -> Self::Timer {
        self.inner.schedule(delay, task)
    }

    fn sleep(&self, _delay: Duration) -> Self::Sleep {
        std::future::pending()
    }
}

/// Preference store backed by a map, standing in for `localStorage`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Status surface that records what it was asked to display.
#[derive(Clone, Default)]
pub struct FakeStatus {
    visible: Rc<Cell<bool>>,
    text: Rc<RefCell<String>>,
    style: Rc<RefCell<Option<StatusStyle>>>,
    hides: Rc<Cell<usize>>,
}

impl FakeStatus {
    pub fn visible(&self) -> bool {
        self.visible.get()
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn style(&self) -> Option<StatusStyle> {
        *self.style.borrow()
    }

    pub fn hides(&self) -> usize {
        self.hides.get()
    }
}

impl StatusSurface for FakeStatus {
    fn show(&self, text: &str, style: &StatusStyle) {
        self.visible.set(true);
        *self.text.borrow_mut() = text.to_owned();
        *self.style.borrow_mut() = Some(*style);
    }

    fn hide(&self) {
        self.visible.set(false);
        self.hides.set(self.hides.get() + 1);
    }
}
