//! Delivery of a contact form submission to the form backend.
//!
//! Client-side (hydrate): a real multipart POST via `gloo-net`.
//! Tests substitute scripted transports through [`FormTransport`].
//!
//! ERROR HANDLING
//! ==============
//! An HTTP error status is a successful transport result; only a request that
//! never produced a response is a [`TransportError`].

use crate::error::TransportError;

use super::types::{SubmissionRequest, TransportResponse};
#[cfg(feature = "hydrate")]
use super::types::ACCEPT_JSON;

/// Sends one submission and reports what came back.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    /// Perform a single POST of `request`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] when no HTTP response was received.
    async fn send(&self, request: &SubmissionRequest) -> Result<TransportResponse, TransportError>;
}

/// `fetch`-backed transport.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl FormTransport for GlooTransport {
    async fn send(&self, request: &SubmissionRequest) -> Result<TransportResponse, TransportError> {
        let body = web_sys::FormData::new().map_err(|e| TransportError::Network(format!("{e:?}")))?;
        for (name, value) in &request.fields.fields {
            body.append_with_str(name, value)
                .map_err(|e| TransportError::Network(format!("{e:?}")))?;
        }

        let (accept, json) = ACCEPT_JSON;
        let resp = gloo_net::http::Request::post(&request.endpoint)
            .header(accept, json)
            .body(body)
            .map_err(|e| TransportError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let mut response = TransportResponse {
            status: resp.status(),
            body: None,
        };
        if response.is_success() {
            return Ok(response);
        }
        response.body = match resp.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                leptos::logging::warn!("form backend body unreadable: {e}");
                None
            }
        };
        Ok(response)
    }
}
