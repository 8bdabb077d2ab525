//! Mobile navigation menu open/closed state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Class carried by the menu and the menu button icon while open.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a menu link always closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Close when a document click lands outside both the button and the menu.
    pub fn on_document_click(&mut self, inside_button: bool, inside_menu: bool) {
        if !inside_button && !inside_menu {
            self.close();
        }
    }
}
