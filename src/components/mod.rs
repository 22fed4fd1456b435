//! View components for the authenticated main view.

pub mod chat_panel;
pub mod profile_panel;
pub mod sidebar;
