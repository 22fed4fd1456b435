use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_starts_at_login() {
    let state = AuthState::default();
    assert_eq!(state.stage, AuthStage::Login);
    assert!(state.message.is_none());
    assert!(!state.busy);
}

// =============================================================
// Stage navigation
// =============================================================

#[test]
fn goto_switches_stage_and_keeps_message() {
    let mut state = AuthState::default();
    state.message = Some("notice".to_owned());
    state.goto(AuthStage::Register);
    assert_eq!(state.stage, AuthStage::Register);
    assert_eq!(state.message.as_deref(), Some("notice"));
}

// =============================================================
// Submission guard
// =============================================================

#[test]
fn begin_submit_sets_busy_and_clears_message() {
    let mut state = AuthState::default();
    state.message = Some("old error".to_owned());
    assert!(state.begin_submit());
    assert!(state.busy);
    assert!(state.message.is_none());
}

#[test]
fn begin_submit_refuses_while_in_flight() {
    let mut state = AuthState::default();
    assert!(state.begin_submit());
    assert!(!state.begin_submit());
}

#[test]
fn fail_clears_busy_and_surfaces_message() {
    let mut state = AuthState::default();
    state.begin_submit();
    state.fail("invalid credentials");
    assert!(!state.busy);
    assert_eq!(state.message.as_deref(), Some("invalid credentials"));
    assert_eq!(state.stage, AuthStage::Login);
}

// =============================================================
// Flow transitions
// =============================================================

#[test]
fn register_success_returns_to_login_with_confirmation() {
    let mut state = AuthState::default();
    state.goto(AuthStage::Register);
    state.begin_submit();
    state.register_succeeded();
    assert_eq!(state.stage, AuthStage::Login);
    assert_eq!(state.message.as_deref(), Some("Account created! Please log in."));
    assert!(!state.busy);
}

#[test]
fn register_failure_stays_on_register() {
    let mut state = AuthState::default();
    state.goto(AuthStage::Register);
    state.begin_submit();
    state.fail("Username already exists");
    assert_eq!(state.stage, AuthStage::Register);
    assert_eq!(state.message.as_deref(), Some("Username already exists"));
}

#[test]
fn forgot_success_moves_to_reset_stage() {
    let mut state = AuthState::default();
    state.goto(AuthStage::Forgot);
    state.begin_submit();
    state.forgot_succeeded();
    assert_eq!(state.stage, AuthStage::Reset);
    assert_eq!(state.message.as_deref(), Some("Code sent! Check your email."));
}

#[test]
fn forgot_failure_stays_on_forgot() {
    let mut state = AuthState::default();
    state.goto(AuthStage::Forgot);
    state.begin_submit();
    state.fail("Email not found");
    assert_eq!(state.stage, AuthStage::Forgot);
}

#[test]
fn reset_success_returns_to_login() {
    let mut state = AuthState::default();
    state.goto(AuthStage::Forgot);
    state.forgot_succeeded();
    state.begin_submit();
    state.reset_succeeded();
    assert_eq!(state.stage, AuthStage::Login);
    assert_eq!(state.message.as_deref(), Some("Password reset! Please log in."));
}
