//! Browser bindings for the page behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is static markup. These modules look up its elements, implement
//! the behavior traits over them, and register event listeners. Each feature
//! binds independently: a missing element disables that feature with a
//! warning and leaves the others running.

pub mod chrome;
pub mod effects;
pub mod form;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::DomError;

/// Wire every feature onto the page once the document has been parsed.
pub fn install() -> Result<(), DomError> {
    let document = document()?;
    if document.ready_state() == "loading" {
        listen(&document, "DOMContentLoaded", |_| install_now())
    } else {
        install_now();
        Ok(())
    }
}

fn install_now() {
    let config = load_config();
    report("theme", chrome::bind_theme());
    report("scroll", chrome::bind_scroll(&config.scroll));
    report("menu", chrome::bind_menu());
    effects::bind_typed(&config.typed);
    report("reveal", effects::bind_reveals());
    report("contact form", form::bind_contact_form(&config.form));
    leptos::logging::log!("Portfolio loaded successfully! 🚀");
}

fn report(feature: &str, result: Result<(), DomError>) {
    if let Err(e) = result {
        leptos::logging::warn!("{feature} disabled: {e}");
    }
}

/// Read the inline `#site-config` block, if the page has one.
fn load_config() -> SiteConfig {
    let raw = document()
        .into_iter()
        .find_map(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    SiteConfig::from_json_or_default(raw.as_deref())
}

pub(crate) fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or_else(|| DomError::Missing("window".to_owned()))
}

pub(crate) fn document() -> Result<Document, DomError> {
    window()?
        .document()
        .ok_or_else(|| DomError::Missing("document".to_owned()))
}

pub(crate) fn query(selector: &str) -> Result<Element, DomError> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| DomError::Missing(selector.to_owned()))
}

pub(crate) fn query_as<T: JsCast>(selector: &str) -> Result<T, DomError> {
    query(selector)?
        .dyn_into::<T>()
        .map_err(|_| DomError::Missing(format!("{selector} (unexpected element type)")))
}

pub(crate) fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(e) = result {
        leptos::logging::warn!("class {class} update failed: {e:?}");
    }
}

pub(crate) fn set_styles(el: &Element, decls: &[(&str, &str)]) {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = el.style();
    for (property, value) in decls {
        if let Err(e) = style.set_property(property, value) {
            leptos::logging::warn!("style {property} update failed: {e:?}");
        }
    }
}

/// Register a listener for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], but promises the browser the handler never cancels.
pub(crate) fn listen_passive(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}
