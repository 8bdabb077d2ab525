//! Typed-text animation.
//!
//! A [`Typewriter`] cycles through its strings: type one character per
//! `type_speed`, hold the full string for `back_delay`, erase one character
//! per `back_speed`, then move to the next string. Each [`Typewriter::tick`]
//! returns the text to display now and how long to wait before the next
//! tick, so the driver is a plain sleep loop.

#[cfg(test)]
#[path = "typed_test.rs"]
mod typed_test;

use std::time::Duration;

use crate::config::TypedConfig;

/// One rendered step of the animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeFrame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Erasing,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    strings: Vec<Vec<char>>,
    index: usize,
    visible: usize,
    phase: Phase,
    type_speed: Duration,
    back_speed: Duration,
    back_delay: Duration,
    looped: bool,
    done: bool,
}

impl Typewriter {
    #[must_use]
    pub fn new(config: &TypedConfig) -> Self {
        Self {
            strings: config.strings.iter().map(|s| s.chars().collect()).collect(),
            index: 0,
            visible: 0,
            phase: Phase::Typing,
            type_speed: Duration::from_millis(config.type_speed_ms),
            back_speed: Duration::from_millis(config.back_speed_ms),
            back_delay: Duration::from_millis(config.back_delay_ms),
            looped: config.looped,
            done: false,
        }
    }

    /// Advance one step. `None` once a non-looping run has typed its last
    /// string, or immediately when there is nothing to type.
    pub fn tick(&mut self) -> Option<TypeFrame> {
        if self.done {
            return None;
        }
        let total = self.strings.get(self.index)?.len();
        let delay = match self.phase {
            Phase::Typing => {
                if self.visible < total {
                    self.visible += 1;
                }
                if self.visible >= total {
                    self.phase = Phase::Holding;
                }
                self.type_speed
            }
            Phase::Holding => {
                if self.is_last() && !self.looped {
                    self.done = true;
                    return None;
                }
                self.phase = Phase::Erasing;
                self.back_delay
            }
            Phase::Erasing => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.index = (self.index + 1) % self.strings.len();
                    self.phase = Phase::Typing;
                }
                self.back_speed
            }
        };
        Some(TypeFrame {
            text: self.current_text(),
            delay,
        })
    }

    fn is_last(&self) -> bool {
        self.index + 1 == self.strings.len()
    }

    fn current_text(&self) -> String {
        // After erasing wraps to the next string, `visible` is already 0.
        self.strings
            .get(self.index)
            .map(|chars| chars.iter().take(self.visible).collect())
            .unwrap_or_default()
    }
}
