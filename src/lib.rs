//! # portfolio
//!
//! Client-side behavior for the static portfolio page, compiled to
//! WebAssembly with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`form`] | Contact form submission state machine and status messages |
//! | [`net`] | Form backend transport and wire shapes |
//! | [`util`] | Theme, scroll chrome, menu, typed text, reveals, timers |
//! | [`config`] | Page tunables and their defaults |
//! | [`error`] | Transport, config and DOM errors |
//! | `dom` | `web-sys` bindings and listener wiring (`hydrate` only) |
//!
//! Everything outside `dom` is browser-independent and unit-tested natively.

pub mod config;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod form;
pub mod net;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: wire page behavior once the module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = dom::install() {
        leptos::logging::warn!("page behavior not installed: {e}");
    }
}
