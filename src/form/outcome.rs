//! Terminal outcomes of a submission and the text shown for each.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use crate::error::TransportError;
use crate::net::types::{TransportResponse, parse_error_messages};

pub const SUCCESS_TEXT: &str =
    "✓ Thank you! Your message has been sent successfully. I will get back to you soon.";
pub const VALIDATION_PREFIX: &str = "✗ Oops! There were errors with your submission: ";
pub const SERVER_ERROR_TEXT: &str = "✗ Oops! There was a problem submitting your form. Please try again.";
pub const NETWORK_ERROR_TEXT: &str =
    "✗ Oops! There was a network error. Please check your connection and try again.";

/// How a finished submission resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The backend accepted the message (2xx).
    Success,
    /// The backend rejected specific fields.
    ValidationError(Vec<String>),
    /// The backend answered with an error that carried no usable detail.
    ServerError,
    /// No response arrived.
    NetworkError,
}

/// Palette a status message is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl SubmissionOutcome {
    /// Classify a transport result. Structured validation detail wins over a
    /// generic server failure, which wins over a connectivity failure.
    #[must_use]
    pub fn classify(result: &Result<TransportResponse, TransportError>) -> Self {
        match result {
            Ok(resp) if resp.is_success() => Self::Success,
            Ok(resp) => resp
                .body
                .as_deref()
                .and_then(parse_error_messages)
                .map_or(Self::ServerError, Self::ValidationError),
            Err(_) => Self::NetworkError,
        }
    }

    #[must_use]
    pub fn tone(&self) -> Tone {
        match self {
            Self::Success => Tone::Success,
            Self::ValidationError(_) | Self::ServerError | Self::NetworkError => Tone::Error,
        }
    }

    /// The single line shown to the visitor.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Success => SUCCESS_TEXT.to_owned(),
            Self::ValidationError(messages) => format!("{VALIDATION_PREFIX}{}", messages.join(", ")),
            Self::ServerError => SERVER_ERROR_TEXT.to_owned(),
            Self::NetworkError => NETWORK_ERROR_TEXT.to_owned(),
        }
    }
}
