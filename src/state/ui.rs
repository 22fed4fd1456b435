#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the main view's tab switcher.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub active_tab: ActiveTab,
}

/// Tabs available in the main view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Chat,
    Profile,
}
