//! Root application component and shared context wiring.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::net::config::ServiceConfig;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::profile::ProfileState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::session_store;

/// Root application component.
///
/// Provides all shared state contexts, reads the persisted session marker
/// once at startup, and switches between the login view and the main view
/// on session presence.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StoredValue::new(ServiceConfig::from_build_env());
    let session = RwSignal::new(SessionState::from_persisted(session_store::load()));
    let auth = RwSignal::new(AuthState::default());
    let chat = RwSignal::new(ChatState::default());
    let profile = RwSignal::new(ProfileState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(config);
    provide_context(session);
    provide_context(auth);
    provide_context(chat);
    provide_context(profile);
    provide_context(ui);

    // Load the preference profile once per sign-in. A fetch failure keeps
    // the defaults in place.
    Effect::new(move || {
        let Some(username) = session.with(|s| s.username().map(ToOwned::to_owned)) else {
            return;
        };
        if profile.with_untracked(|p| p.loaded) {
            return;
        }

        #[cfg(feature = "web")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                let wire = crate::net::api::fetch_profile(&config, &username).await;
                profile.update(|p| p.load(wire.as_ref()));
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = username;
            profile.update(|p| p.load(None));
        }
    });

    view! {
        <Title text="SafePlate"/>

        {move || {
            if session.with(SessionState::is_authenticated) {
                view! { <HomePage/> }.into_any()
            } else {
                view! { <LoginPage/> }.into_any()
            }
        }}
    }
}

/// Sign-out teardown: clear the persisted marker, the in-memory session,
/// the conversation, and reset the remaining session-scoped state so the
/// next sign-in starts fresh.
pub fn sign_out(
    session: RwSignal<SessionState>,
    auth: RwSignal<AuthState>,
    chat: RwSignal<ChatState>,
    profile: RwSignal<ProfileState>,
    ui: RwSignal<UiState>,
) {
    session_store::clear();
    session.update(SessionState::sign_out);
    chat.update(ChatState::clear);
    auth.set(AuthState::default());
    profile.set(ProfileState::default());
    ui.set(UiState::default());
}
