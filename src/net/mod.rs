//! Networking for the contact form backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` performs the POST and `types` defines the request/response
//! shapes and the validation error body.

pub mod transport;
pub mod types;
