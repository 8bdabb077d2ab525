#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn project_cards_start_hidden_and_offset() {
    let spec = RevealSpec::project_cards();
    assert_eq!(spec.selector, ".project-card");
    assert!(spec.initial.contains(&("opacity", "0")));
    assert!(spec.initial.contains(&("transform", "translateY(50px)")));
    assert_eq!(spec.threshold, 0.1);
    assert_eq!(spec.root_margin, Some("0px 0px -100px 0px"));
}

#[test]
fn project_cards_reveal_to_resting_position() {
    let spec = RevealSpec::project_cards();
    assert_eq!(spec.revealed, &[("opacity", "1"), ("transform", "translateY(0)")]);
}

#[test]
fn skill_bars_only_fade_in() {
    let spec = RevealSpec::skill_bars();
    assert!(spec.initial.is_empty());
    assert_eq!(spec.revealed, &[("opacity", "1")]);
    assert_eq!(spec.threshold, 0.5);
    assert_eq!(spec.root_margin, None);
}

#[test]
fn every_group_reveals_opacity() {
    for spec in RevealSpec::all() {
        assert!(spec.revealed.iter().any(|(prop, value)| *prop == "opacity" && *value == "1"));
    }
}
