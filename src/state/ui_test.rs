use super::*;

#[test]
fn ui_state_default_tab_is_chat() {
    let state = UiState::default();
    assert_eq!(state.active_tab, ActiveTab::Chat);
}

#[test]
fn active_tab_variants_are_distinct() {
    assert_ne!(ActiveTab::Chat, ActiveTab::Profile);
}
