//! Contact form bindings: the form, its submit button and the status line.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlButtonElement, HtmlElement, HtmlFormElement};

use super::{listen, query_as};
use crate::config::FormConfig;
use crate::error::DomError;
use crate::form::controller::{ContactForm, FormSubmissionController, SubmitControl};
use crate::form::status::{StatusMessenger, StatusStyle, StatusSurface};
use crate::net::transport::GlooTransport;
use crate::net::types::FormSnapshot;
use crate::util::scheduler::BrowserScheduler;

pub struct HtmlContactForm {
    form: HtmlFormElement,
}

impl ContactForm for HtmlContactForm {
    fn endpoint(&self) -> String {
        self.form.action()
    }

    fn snapshot(&self) -> FormSnapshot {
        match form_fields(&self.form) {
            Ok(fields) => FormSnapshot::new(fields),
            Err(e) => {
                leptos::logging::warn!("contact form fields unreadable: {e}");
                FormSnapshot::default()
            }
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// Text entries of the form's data set. File inputs are not collected.
fn form_fields(form: &HtmlFormElement) -> Result<Vec<(String, String)>, DomError> {
    let data = FormData::new_with_form(form)?;
    let mut fields = Vec::new();
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(fields);
    };
    for entry in entries {
        let pair = js_sys::Array::from(&entry?);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push((name, value));
        }
    }
    Ok(fields)
}

pub struct HtmlSubmitButton {
    button: HtmlButtonElement,
}

impl SubmitControl for HtmlSubmitButton {
    fn is_disabled(&self) -> bool {
        self.button.disabled()
    }

    fn set_disabled(&self, disabled: bool) {
        self.button.set_disabled(disabled);
    }

    fn label(&self) -> String {
        self.button.text_content().unwrap_or_default()
    }

    fn set_label(&self, label: &str) {
        self.button.set_text_content(Some(label));
    }
}

pub struct HtmlStatus {
    el: HtmlElement,
}

impl StatusSurface for HtmlStatus {
    fn show(&self, text: &str, style: &StatusStyle) {
        self.el.set_text_content(Some(text));
        super::set_styles(&self.el, &style.declarations());
    }

    fn hide(&self) {
        super::set_styles(&self.el, &[("display", "none")]);
    }
}

/// Intercept `#contact-form` submissions and run them through the controller.
pub fn bind_contact_form(config: &FormConfig) -> Result<(), DomError> {
    let form: HtmlFormElement = query_as("#contact-form")?;
    let button = form
        .query_selector("button[type=\"submit\"]")?
        .and_then(|el| el.dyn_ref::<HtmlButtonElement>().cloned())
        .ok_or_else(|| DomError::Missing("#contact-form button[type=\"submit\"]".to_owned()))?;
    let status = match query_as::<HtmlElement>(".form-status") {
        Ok(el) => Some(HtmlStatus { el }),
        Err(e) => {
            leptos::logging::warn!("status messages disabled: {e}");
            None
        }
    };

    let messenger = StatusMessenger::new(status, BrowserScheduler, config);
    let controller = Rc::new(FormSubmissionController::new(
        HtmlContactForm { form: form.clone() },
        HtmlSubmitButton { button },
        GlooTransport,
        messenger,
        config,
    ));

    listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let controller = Rc::clone(&controller);
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(attempt) = controller.submit().await {
                leptos::logging::log!("contact form settled: {:?}", attempt.outcome);
            }
        });
    })
}
