//! Main application view: sidebar plus the active tab's panel.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::profile_panel::ProfilePanel;
use crate::components::sidebar::Sidebar;
use crate::state::ui::{ActiveTab, UiState};

/// Authenticated main view with the chat assistant and preference editor.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="home-page">
            <Sidebar/>
            <main class="home-page__content">
                {move || match ui.with(|u| u.active_tab) {
                    ActiveTab::Chat => view! { <ChatPanel/> }.into_any(),
                    ActiveTab::Profile => view! { <ProfilePanel/> }.into_any(),
                }}
            </main>
        </div>
    }
}
