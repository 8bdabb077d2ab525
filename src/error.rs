//! Error types for the failure paths that are real errors.
//!
//! Submission outcomes (validation, server and network failures) are values,
//! see [`crate::form::outcome::SubmissionOutcome`]. The types here cover the
//! transport itself, config parsing and DOM lookups.

use std::time::Duration;

/// Failure to complete a request to the form backend.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),
    /// The configured request timeout elapsed first.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

/// Error returned by [`crate::config::SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error raised while binding page behavior to the DOM.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// A selector matched nothing on the page.
    #[error("missing element: {0}")]
    Missing(String),
    /// A `web-sys` call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
