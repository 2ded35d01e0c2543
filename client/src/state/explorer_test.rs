use super::*;

#[test]
fn explorer_state_defaults_to_pinned_at_default_width() {
    let state = ExplorerState::default();
    assert!(state.pinned);
    assert_eq!(state.width, 256.0);
}

#[test]
fn toggle_pinned_flips_and_returns_new_value() {
    let mut state = ExplorerState::default();
    assert!(!state.toggle_pinned());
    assert!(!state.pinned);
    assert!(state.toggle_pinned());
    assert!(state.pinned);
}

#[test]
fn pin_label_describes_next_action() {
    let mut state = ExplorerState::default();
    assert_eq!(state.pin_label(), "Unpin");
    state.pinned = false;
    assert_eq!(state.pin_label(), "Pin");
}
