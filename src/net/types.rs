//! Wire shapes exchanged with the form backend.
//!
//! Requests carry the form fields as multipart data; the backend answers
//! JSON. Only the validation error body is interpreted:
//! `{ "errors": [ { "message": "..." }, ... ] }`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Field name/value pairs collected from the form at submit time, in
/// document order. Duplicate names are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub fields: Vec<(String, String)>,
}

impl FormSnapshot {
    #[must_use]
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// First value submitted under `name`.
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A single POST to the form backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub endpoint: String,
    pub fields: FormSnapshot,
}

/// Request header asking the backend for JSON instead of a redirect page.
pub const ACCEPT_JSON: (&str, &str) = ("Accept", "application/json");

/// What the transport observed once an HTTP response arrived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    /// `None` when the body could not be read.
    pub body: Option<String>,
}

impl TransportResponse {
    /// Any 2xx status counts as accepted.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Extract validation messages from an error response body, in order.
///
/// Returns `None` when the body is not JSON, has no `errors` array, or an
/// entry lacks a `message`, so the caller can fall back to a generic server
/// error. A present but empty array yields an empty list.
#[must_use]
pub fn parse_error_messages(body: &str) -> Option<Vec<String>> {
    let parsed: ErrorBody = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            leptos::logging::warn!("unreadable error body from form backend: {e}");
            return None;
        }
    };
    Some(parsed.errors.into_iter().map(|entry| entry.message).collect())
}
