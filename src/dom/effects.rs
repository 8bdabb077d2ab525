//! Typed-text headline and intersection-driven reveal animations.

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{query, query_all, set_styles, window};
use crate::config::TypedConfig;
use crate::error::DomError;
use crate::util::reveal::RevealSpec;
use crate::util::scheduler::{BrowserScheduler, Scheduler};
use crate::util::typed::Typewriter;

/// Start one typewriter per configured target; absent targets are skipped.
pub fn bind_typed(config: &TypedConfig) {
    for selector in &config.targets {
        let el = match query(selector) {
            Ok(el) => el,
            Err(e) => {
                leptos::logging::warn!("typed text skipped: {e}");
                continue;
            }
        };
        let mut writer = Typewriter::new(config);
        wasm_bindgen_futures::spawn_local(async move {
            while let Some(frame) = writer.tick() {
                el.set_text_content(Some(&frame.text));
                BrowserScheduler.sleep(frame.delay).await;
            }
        });
    }
}

/// Observe every reveal group. A browser without `IntersectionObserver`
/// keeps the elements in their stylesheet state.
pub fn bind_reveals() -> Result<(), DomError> {
    let window = window()?;
    if !Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))? {
        leptos::logging::log!("IntersectionObserver unsupported; reveals disabled");
        return Ok(());
    }
    for spec in RevealSpec::all() {
        observe(&spec)?;
    }
    Ok(())
}

fn observe(spec: &RevealSpec) -> Result<(), DomError> {
    let targets = query_all(spec.selector)?;
    if targets.is_empty() {
        return Ok(());
    }

    let revealed = spec.revealed;
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                set_styles(&target, revealed);
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(spec.threshold));
    if let Some(margin) = spec.root_margin {
        options.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in &targets {
        set_styles(target, spec.initial);
        observer.observe(target);
    }
    Ok(())
}
