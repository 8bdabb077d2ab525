//! Contact form submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! `controller` runs the submission state machine, `outcome` classifies the
//! backend's answer into visitor-facing text, and `status` renders that text
//! and schedules its auto-hide.

pub mod controller;
pub mod outcome;
pub mod status;
