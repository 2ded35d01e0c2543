use super::*;

#[test]
fn status_bar_hidden_when_onboarding_off_and_incomplete() {
    assert!(!OnboardingFlags::default().shows_status_bar());
}

#[test]
fn status_bar_shown_when_enabled_or_complete() {
    assert!(OnboardingFlags { enabled: true, complete: false }.shows_status_bar());
    assert!(OnboardingFlags { enabled: false, complete: true }.shows_status_bar());
    assert!(OnboardingFlags { enabled: true, complete: true }.shows_status_bar());
}

#[test]
fn flags_mirror_state() {
    let state = OnboardingState { enabled: true, ..OnboardingState::default() };
    assert_eq!(state.flags(), OnboardingFlags { enabled: true, complete: false });
}

#[test]
fn progress_label_counts_steps() {
    let state = OnboardingState { enabled: true, steps_done: 2, ..OnboardingState::default() };
    assert_eq!(state.progress_label(), "2 of 5 steps");
}

#[test]
fn progress_label_reports_completion() {
    let state = OnboardingState { complete: true, ..OnboardingState::default() };
    assert_eq!(state.progress_label(), "Onboarding complete");
}

#[test]
fn advance_completes_on_last_step() {
    let mut state = OnboardingState { enabled: true, steps_done: 4, ..OnboardingState::default() };
    state.advance();
    assert_eq!(state.steps_done, 5);
    assert!(state.complete);
    assert!(!state.enabled);
    assert!(state.flags().shows_status_bar());
}

#[test]
fn advance_after_completion_is_noop() {
    let mut state = OnboardingState { complete: true, steps_done: 5, ..OnboardingState::default() };
    state.advance();
    assert_eq!(state.steps_done, 5);
}
