use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().open);
}

#[test]
fn toggle_flips_open_state() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(menu.open);
    menu.toggle();
    assert!(!menu.open);
}

#[test]
fn close_is_idempotent() {
    let mut menu = MenuState { open: true };
    menu.close();
    menu.close();
    assert!(!menu.open);
}

#[test]
fn outside_click_closes_menu() {
    let mut menu = MenuState { open: true };
    menu.on_document_click(false, false);
    assert!(!menu.open);
}

#[test]
fn inside_clicks_keep_menu_open() {
    let mut menu = MenuState { open: true };
    menu.on_document_click(false, true);
    assert!(menu.open);
    menu.on_document_click(true, false);
    assert!(menu.open);
}
