//! Transient status line under the contact form.
//!
//! A message is shown immediately with the palette for its [`Tone`] and hidden
//! again after the configured delay. With `reset_hide_timer` enabled, showing
//! a new message invalidates the hide scheduled for the previous one, so every
//! message gets its full window.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::FormConfig;
use crate::util::scheduler::Scheduler;

use super::outcome::Tone;

/// A text element that can be shown, styled and hidden.
pub trait StatusSurface {
    fn show(&self, text: &str, style: &StatusStyle);
    fn hide(&self);
}

/// Inline style applied with a status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusStyle {
    pub color: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub padding: &'static str,
    pub border_radius: &'static str,
}

impl StatusStyle {
    #[must_use]
    pub fn for_tone(tone: Tone) -> Self {
        let (color, background, border) = match tone {
            Tone::Success => ("#4BB543", "rgba(75, 181, 67, 0.1)", "1px solid #4BB543"),
            Tone::Error => ("#dc3545", "rgba(220, 53, 69, 0.1)", "1px solid #dc3545"),
        };
        Self {
            color,
            background,
            border,
            padding: "10px 15px",
            border_radius: "6px",
        }
    }

    /// `(property, value)` pairs in the order they are applied.
    #[must_use]
    pub fn declarations(&self) -> [(&'static str, &'static str); 6] {
        [
            ("display", "block"),
            ("color", self.color),
            ("background-color", self.background),
            ("padding", self.padding),
            ("border-radius", self.border_radius),
            ("border", self.border),
        ]
    }
}

/// Shows status messages on a surface and schedules their auto-hide.
pub struct StatusMessenger<V, S> {
    surface: Option<Rc<V>>,
    scheduler: S,
    hide_after: Duration,
    reset_hide_timer: bool,
    generation: Rc<Cell<u64>>,
}

impl<V, S> StatusMessenger<V, S>
where
    V: StatusSurface + 'static,
    S: Scheduler,
{
    /// `surface` is `None` when the page has no status element; showing is
    /// then a no-op.
    pub fn new(surface: Option<V>, scheduler: S, config: &FormConfig) -> Self {
        Self {
            surface: surface.map(Rc::new),
            scheduler,
            hide_after: config.status_hide_delay(),
            reset_hide_timer: config.reset_hide_timer,
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn show(&self, tone: Tone, text: &str) {
        let Some(surface) = &self.surface else {
            return;
        };
        surface.show(text, &StatusStyle::for_tone(tone));

        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        let current = Rc::clone(&self.generation);
        let reset = self.reset_hide_timer;
        let surface = Rc::clone(surface);
        self.scheduler.defer(
            self.hide_after,
            Box::new(move || {
                if !reset || current.get() == generation {
                    surface.hide();
                }
            }),
        );
    }
}
