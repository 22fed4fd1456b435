use super::*;

// =============================================================
// Init
// =============================================================

#[test]
fn default_is_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.username().is_none());
}

#[test]
fn from_persisted_adopts_stored_identity() {
    let state = SessionState::from_persisted(Some("ann".to_owned()));
    assert!(state.is_authenticated());
    assert_eq!(state.username(), Some("ann"));
}

#[test]
fn from_persisted_none_shows_login() {
    let state = SessionState::from_persisted(None);
    assert!(!state.is_authenticated());
}

// =============================================================
// Sign in / sign out
// =============================================================

#[test]
fn sign_in_sets_identity() {
    let mut state = SessionState::default();
    state.sign_in("ann");
    assert_eq!(state.username(), Some("ann"));
}

#[test]
fn sign_out_clears_identity() {
    let mut state = SessionState::from_persisted(Some("ann".to_owned()));
    state.sign_out();
    assert!(!state.is_authenticated());
    assert!(state.username().is_none());
}
