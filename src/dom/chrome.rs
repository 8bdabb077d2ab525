//! Theme switch, sticky navbar, scroll-up button and mobile menu.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, Node, ScrollBehavior, ScrollToOptions};

use super::{document, listen, listen_passive, query, query_all, query_as, set_class, set_styles, window};
use crate::config::ScrollConfig;
use crate::error::DomError;
use crate::util::menu::{ACTIVE_CLASS, MenuState};
use crate::util::scheduler::BrowserScheduler;
use crate::util::scroll::{Debouncer, ScrollChrome};
use crate::util::theme::{DARK_CLASS, LocalStorage, Theme};

/// Apply the stored theme and keep it in sync with `#theme-switch`.
pub fn bind_theme() -> Result<(), DomError> {
    let body = document()?
        .body()
        .ok_or_else(|| DomError::Missing("body".to_owned()))?;
    let theme = Theme::load(&LocalStorage);
    apply_theme(&body, theme);

    let switch: HtmlInputElement = query_as("#theme-switch")?;
    switch.set_checked(theme.is_dark());
    let source = switch.clone();
    listen(&switch, "change", move |_| {
        let theme = Theme::from_checked(source.checked());
        apply_theme(&body, theme);
        theme.persist(&LocalStorage);
    })
}

fn apply_theme(body: &HtmlElement, theme: Theme) {
    set_class(body, DARK_CLASS, theme.is_dark());
}

/// Sticky navbar and scroll-up button, updated on debounced scroll.
pub fn bind_scroll(config: &ScrollConfig) -> Result<(), DomError> {
    let window = window()?;
    let navbar = query(".navbar")?;
    let scroll_up = query(".scroll-up-btn")?;

    let debouncer = Debouncer::new(BrowserScheduler, config.debounce());
    let config = Rc::new(config.clone());
    let scrolled = window.clone();
    let scroll_up_btn = scroll_up.clone();
    listen_passive(&window, "scroll", move |_| {
        let window = scrolled.clone();
        let navbar = navbar.clone();
        let scroll_up = scroll_up_btn.clone();
        let config = Rc::clone(&config);
        debouncer.trigger(move || {
            let offset = match window.scroll_y() {
                Ok(offset) => offset,
                Err(e) => {
                    leptos::logging::warn!("scroll offset unavailable: {e:?}");
                    return;
                }
            };
            let chrome = ScrollChrome::at(offset, &config);
            set_class(&navbar, "sticky", chrome.sticky);
            set_class(&scroll_up, "show", chrome.show_scroll_up);
        });
    })?;

    listen(&scroll_up, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    })
}

/// The menu and its button icon both carry the open state.
#[derive(Clone)]
struct MenuView {
    state: Rc<Cell<MenuState>>,
    menu: Element,
    icon: Element,
}

impl MenuView {
    fn update(&self, change: impl FnOnce(&mut MenuState)) {
        let mut state = self.state.get();
        change(&mut state);
        self.state.set(state);
        set_class(&self.menu, ACTIVE_CLASS, state.open);
        set_class(&self.icon, ACTIVE_CLASS, state.open);
    }
}

/// Mobile menu: toggle button, close on link follow and on outside click.
pub fn bind_menu() -> Result<(), DomError> {
    let button = query(".menu-btn")?;
    let view = MenuView {
        state: Rc::new(Cell::new(MenuState::default())),
        menu: query(".navbar .menu")?,
        icon: query(".menu-btn i")?,
    };

    {
        let view = view.clone();
        listen(&button, "click", move |_| view.update(MenuState::toggle))?;
    }

    for link in query_all(".navbar .menu li a")? {
        let view = view.clone();
        listen(&link, "click", move |_| {
            smooth_scroll_root();
            view.update(MenuState::close);
        })?;
    }

    let document = document()?;
    listen(&document, "click", move |ev| {
        let target = ev.target().and_then(|t| t.dyn_ref::<Node>().cloned());
        let inside_button = button.contains(target.as_ref());
        let inside_menu = view.menu.contains(target.as_ref());
        view.update(|state| state.on_document_click(inside_button, inside_menu));
    })
}

fn smooth_scroll_root() {
    let Some(root) = document()
        .into_iter()
        .find_map(|doc| doc.document_element())
    else {
        return;
    };
    set_styles(&root, &[("scroll-behavior", "smooth")]);
}
