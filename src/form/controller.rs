//! Contact form submission lifecycle.
//!
//! ARCHITECTURE
//! ============
//! `Idle --submit--> Sending --> Success | ValidationError | ServerError |
//! NetworkError --> Idle`. The submit control is disabled and relabelled for
//! the duration of `Sending`, which is what serializes attempts: a submit
//! while an attempt is in flight is ignored.
//!
//! The page elements are reached through small traits ([`ContactForm`],
//! [`SubmitControl`], [`StatusSurface`]) so the whole machine runs in native
//! tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Nothing escapes [`FormSubmissionController::submit`]. Every failure is
//! classified into a [`SubmissionOutcome`] and shown to the visitor, and the
//! control is restored by a drop guard, so restoration also happens if the
//! send panics or the future is dropped mid-flight.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};

use crate::config::FormConfig;
use crate::error::TransportError;
use crate::net::transport::FormTransport;
use crate::net::types::{FormSnapshot, SubmissionRequest, TransportResponse};
use crate::util::scheduler::Scheduler;

use super::outcome::SubmissionOutcome;
use super::status::{StatusMessenger, StatusSurface};

/// The form element: field enumeration, declared action and reset.
pub trait ContactForm {
    /// Destination URL, read at submit time.
    fn endpoint(&self) -> String;
    /// Current field values in document order.
    fn snapshot(&self) -> FormSnapshot;
    /// Clear every field.
    fn reset(&self);
}

/// The submit button: a disableable control with a text label.
pub trait SubmitControl {
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Sending,
}

/// One submission, from snapshot to settled outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionAttempt {
    pub request: SubmissionRequest,
    /// `None` while pending.
    pub outcome: Option<SubmissionOutcome>,
}

/// Drives contact form submissions for one form.
pub struct FormSubmissionController<F, C, T, V, S> {
    form: F,
    control: C,
    transport: T,
    status: StatusMessenger<V, S>,
    sending_label: String,
    request_timeout: Option<Duration>,
    phase: Cell<Phase>,
}

impl<F, C, T, V, S> FormSubmissionController<F, C, T, V, S>
where
    F: ContactForm,
    C: SubmitControl,
    T: FormTransport,
    V: StatusSurface + 'static,
    S: Scheduler,
{
    pub fn new(form: F, control: C, transport: T, status: StatusMessenger<V, S>, config: &FormConfig) -> Self {
        Self {
            form,
            control,
            transport,
            status,
            sending_label: config.sending_label.clone(),
            request_timeout: config.request_timeout(),
            phase: Cell::new(Phase::Idle),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    /// Run one submission to completion.
    ///
    /// Returns `None` without side effects when an attempt is already in
    /// flight; otherwise the settled attempt.
    pub async fn submit(&self) -> Option<SubmissionAttempt> {
        if self.phase.get() == Phase::Sending || self.control.is_disabled() {
            leptos::logging::log!("contact form busy; submit ignored");
            return None;
        }

        let _sending = SendingGuard::enter(&self.control, &self.phase, &self.sending_label);
        let mut attempt = SubmissionAttempt {
            request: SubmissionRequest {
                endpoint: self.form.endpoint(),
                fields: self.form.snapshot(),
            },
            outcome: None,
        };

        let result = self.send(&attempt.request).await;
        if let Err(e) = &result {
            leptos::logging::warn!("contact form delivery failed: {e}");
        }
        let outcome = SubmissionOutcome::classify(&result);
        if outcome == SubmissionOutcome::Success {
            self.form.reset();
        }
        self.status.show(outcome.tone(), &outcome.message());
        attempt.outcome = Some(outcome);
        Some(attempt)
    }

    async fn send(&self, request: &SubmissionRequest) -> Result<TransportResponse, TransportError> {
        let send = self.transport.send(request);
        let Some(timeout) = self.request_timeout else {
            return send.await;
        };
        let sleep = self.status.scheduler().sleep(timeout);
        match select(pin!(send), pin!(sleep)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(TransportError::Timeout(timeout)),
        }
    }
}

/// Holds the control in its sending state; restores it when dropped.
struct SendingGuard<'a, C: SubmitControl> {
    control: &'a C,
    phase: &'a Cell<Phase>,
    original_label: String,
}

impl<'a, C: SubmitControl> SendingGuard<'a, C> {
    fn enter(control: &'a C, phase: &'a Cell<Phase>, sending_label: &str) -> Self {
        let original_label = control.label();
        control.set_disabled(true);
        control.set_label(sending_label);
        phase.set(Phase::Sending);
        Self {
            control,
            phase,
            original_label,
        }
    }
}

impl<C: SubmitControl> Drop for SendingGuard<'_, C> {
    fn drop(&mut self) {
        self.control.set_disabled(false);
        self.control.set_label(&self.original_label);
        self.phase.set(Phase::Idle);
    }
}
