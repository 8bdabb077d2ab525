//! Peripheral page behavior and shared helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module holds the browser-independent logic of one page feature so it
//! can be unit-tested natively; the `dom` module binds them to elements.

pub mod menu;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod theme;
pub mod typed;
