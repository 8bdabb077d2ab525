//! Page tunables with defaults matching the shipped site.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page may embed a `<script id="site-config" type="application/json">`
//! block. Every section is `#[serde(default)]`, so a partial document only
//! overrides the keys it names. A missing or malformed block falls back to
//! [`SiteConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Element id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Top-level page configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub form: FormConfig,
    pub scroll: ScrollConfig,
    pub typed: TypedConfig,
}

impl SiteConfig {
    /// Parse a config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `raw` is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse `raw` when present, falling back to defaults on any problem.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("{e}; using default site config");
                Self::default()
            }
        }
    }
}

/// Contact form submission settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Label shown on the submit control while a request is in flight.
    pub sending_label: String,
    /// How long a status message stays visible.
    pub status_hide_ms: u64,
    /// When set, a new message invalidates hides scheduled for older ones.
    pub reset_hide_timer: bool,
    /// Upper bound on the backend request. `None` waits for the transport.
    pub request_timeout_ms: Option<u64>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            sending_label: "Sending...".to_owned(),
            status_hide_ms: 5000,
            reset_hide_timer: true,
            request_timeout_ms: None,
        }
    }
}

impl FormConfig {
    #[must_use]
    pub fn status_hide_delay(&self) -> Duration {
        Duration::from_millis(self.status_hide_ms)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

/// Navbar and scroll-up button thresholds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Vertical offset past which the navbar turns sticky.
    pub sticky_offset: f64,
    /// Vertical offset past which the scroll-up button shows.
    pub scroll_up_offset: f64,
    pub debounce_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            sticky_offset: 20.0,
            scroll_up_offset: 500.0,
            debounce_ms: 10,
        }
    }
}

impl ScrollConfig {
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Typed-text animation settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypedConfig {
    pub strings: Vec<String>,
    pub type_speed_ms: u64,
    pub back_speed_ms: u64,
    /// Pause on a fully typed string before erasing it.
    pub back_delay_ms: u64,
    pub looped: bool,
    /// CSS selectors of the elements that receive the animation.
    pub targets: Vec<String>,
}

impl Default for TypedConfig {
    fn default() -> Self {
        Self {
            strings: ["Developer", "Programmer", "Designer", "Problem Solver"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            type_speed_ms: 100,
            back_speed_ms: 60,
            back_delay_ms: 700,
            looped: true,
            targets: vec![".typing".to_owned(), ".typing-2".to_owned()],
        }
    }
}
