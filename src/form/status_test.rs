use std::time::Duration;

use super::*;
use crate::test_support::{FakeStatus, ManualScheduler};

fn messenger(reset_hide_timer: bool) -> (StatusMessenger<FakeStatus, ManualScheduler>, FakeStatus, ManualScheduler) {
    let surface = FakeStatus::default();
    let scheduler = ManualScheduler::new();
    let config = FormConfig {
        reset_hide_timer,
        ..FormConfig::default()
    };
    let messenger = StatusMessenger::new(Some(surface.clone()), scheduler.clone(), &config);
    (messenger, surface, scheduler)
}

// =============================================================
// StatusStyle
// =============================================================

#[test]
fn success_and_error_palettes_differ() {
    let ok = StatusStyle::for_tone(Tone::Success);
    let err = StatusStyle::for_tone(Tone::Error);
    assert_eq!(ok.color, "#4BB543");
    assert_eq!(err.color, "#dc3545");
    assert_eq!(ok.border, "1px solid #4BB543");
    assert_eq!(err.border, "1px solid #dc3545");
    assert_eq!(ok.padding, err.padding);
    assert_eq!(ok.border_radius, "6px");
}

#[test]
fn declarations_start_by_making_visible() {
    let decls = StatusStyle::for_tone(Tone::Error).declarations();
    assert_eq!(decls[0], ("display", "block"));
    assert!(decls.contains(&("background-color", "rgba(220, 53, 69, 0.1)")));
    assert!(decls.contains(&("padding", "10px 15px")));
}

// =============================================================
// StatusMessenger
// =============================================================

#[test]
fn show_is_immediately_visible_with_tone_style() {
    let (messenger, surface, _) = messenger(true);
    messenger.show(Tone::Success, "✓ done");
    assert!(surface.visible());
    assert_eq!(surface.text(), "✓ done");
    assert_eq!(surface.style(), Some(StatusStyle::for_tone(Tone::Success)));
}

#[test]
fn hides_exactly_at_five_seconds() {
    let (messenger, surface, scheduler) = messenger(true);
    messenger.show(Tone::Error, "✗ nope");

    scheduler.advance(Duration::from_millis(4999));
    assert!(surface.visible());
    scheduler.advance(Duration::from_millis(1));
    assert!(!surface.visible());
    assert_eq!(surface.hides(), 1);
}

#[test]
fn newer_message_survives_stale_hide_when_resetting() {
    let (messenger, surface, scheduler) = messenger(true);
    messenger.show(Tone::Error, "first");
    scheduler.advance(Duration::from_millis(3000));
    messenger.show(Tone::Success, "second");

    scheduler.advance(Duration::from_millis(2000));
    assert!(surface.visible());
    assert_eq!(surface.text(), "second");

    scheduler.advance(Duration::from_millis(3000));
    assert!(!surface.visible());
}

#[test]
fn legacy_policy_lets_stale_hide_fire() {
    let (messenger, surface, scheduler) = messenger(false);
    messenger.show(Tone::Error, "first");
    scheduler.advance(Duration::from_millis(3000));
    messenger.show(Tone::Success, "second");

    scheduler.advance(Duration::from_millis(2000));
    assert!(!surface.visible());
    assert_eq!(surface.hides(), 1);

    scheduler.advance(Duration::from_millis(3000));
    assert_eq!(surface.hides(), 2);
}

#[test]
fn missing_surface_is_noop() {
    let scheduler = ManualScheduler::new();
    let messenger: StatusMessenger<FakeStatus, _> =
        StatusMessenger::new(None, scheduler.clone(), &FormConfig::default());
    messenger.show(Tone::Success, "ignored");
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn hide_delay_follows_config() {
    let surface = FakeStatus::default();
    let scheduler = ManualScheduler::new();
    let config = FormConfig {
        status_hide_ms: 1200,
        ..FormConfig::default()
    };
    let messenger = StatusMessenger::new(Some(surface.clone()), scheduler.clone(), &config);
    messenger.show(Tone::Success, "quick");
    scheduler.advance(Duration::from_millis(1200));
    assert!(!surface.visible());
}
