//! Sidebar with tab navigation and sign-out.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::profile::ProfileState;
use crate::state::session::SessionState;
use crate::state::ui::{ActiveTab, UiState};

/// Sidebar showing the signed-in identity, the tab switcher, and sign-out.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = move || session.with(|s| s.username().unwrap_or_default().to_owned());
    let active_tab = move || ui.with(|u| u.active_tab);

    let on_sign_out = move |_| crate::app::sign_out(session, auth, chat, profile, ui);

    view! {
        <aside class="sidebar">
            <div class="sidebar__header">
                <h1 class="sidebar__brand">"SafePlate"</h1>
                <p class="sidebar__user">{move || format!("Logged in as {}", username())}</p>
            </div>

            <nav class="sidebar__nav">
                <button
                    class="sidebar__tab"
                    class:sidebar__tab--active=move || active_tab() == ActiveTab::Chat
                    on:click=move |_| ui.update(|u| u.active_tab = ActiveTab::Chat)
                >
                    "Chat Assistant"
                </button>
                <button
                    class="sidebar__tab"
                    class:sidebar__tab--active=move || active_tab() == ActiveTab::Profile
                    on:click=move |_| ui.update(|u| u.active_tab = ActiveTab::Profile)
                >
                    "My Preferences"
                </button>
            </nav>

            <div class="sidebar__footer">
                <button class="sidebar__sign-out" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}
