//! Preference profile editor.
//!
//! Edits mutate the in-memory profile only; "Save Changes" pushes the whole
//! profile in one request. No client-side validation of numeric ranges or
//! allergen syntax; the allergen field is free text split on commas when
//! constraints are derived.

use leptos::prelude::*;

use crate::net::config::ServiceConfig;
use crate::state::profile::{CuisinePref, ProfileState};
use crate::state::session::SessionState;

/// Profile editor bound to the in-memory preference profile.
#[component]
pub fn ProfilePanel() -> impl IntoView {
    let config = expect_context::<StoredValue<ServiceConfig>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();

    let do_save = move || {
        if !profile.try_update(ProfileState::begin_save).unwrap_or(false) {
            return;
        }
        let Some(username) = session.with_untracked(|s| s.username().map(ToOwned::to_owned)) else {
            profile.update(|p| p.save_failed("Not signed in."));
            return;
        };
        let wire = profile.with_untracked(|p| p.profile.to_wire());

        #[cfg(feature = "web")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::save_profile(&config, &username, &wire).await {
                    Ok(()) => profile.update(ProfileState::save_succeeded),
                    Err(err) => profile.update(|p| p.save_failed(err.user_message())),
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (config, username, wire);
            profile.update(|p| p.save_failed(crate::net::types::ApiError::Connection.user_message()));
        }
    };

    view! {
        <div class="profile-panel">
            <div class="profile-panel__card">
                <h2 class="profile-panel__title">"Your Safe Profile"</h2>

                <label class="profile-panel__label">
                    "Allergens"
                    <input
                        class="profile-panel__input"
                        type="text"
                        placeholder="e.g. peanuts, shellfish"
                        prop:value=move || profile.with(|p| p.profile.allergens.clone())
                        on:input=move |ev| {
                            profile.update(|p| p.profile.allergens = event_target_value(&ev));
                        }
                    />
                </label>

                <div class="profile-panel__row">
                    <label class="profile-panel__label">
                        "Calorie Limit"
                        <input
                            class="profile-panel__input"
                            type="number"
                            prop:value=move || profile.with(|p| p.profile.calorie_limit.to_string())
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse() {
                                    profile.update(|p| p.profile.calorie_limit = value);
                                }
                            }
                        />
                    </label>
                    <label class="profile-panel__label">
                        "Preferred Cuisine"
                        <select
                            class="profile-panel__input"
                            prop:value=move || profile.with(|p| p.profile.cuisine_pref.label().to_owned())
                            on:change=move |ev| {
                                profile
                                    .update(|p| {
                                        p.profile.cuisine_pref = CuisinePref::from_label(&event_target_value(&ev));
                                    });
                            }
                        >
                            {CuisinePref::ALL
                                .into_iter()
                                .map(|cuisine| view! { <option value=cuisine.label()>{cuisine.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                <label class="profile-panel__label">
                    "Cooking Time (minutes)"
                    <input
                        class="profile-panel__input"
                        type="number"
                        prop:value=move || profile.with(|p| p.profile.cooking_time.to_string())
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse() {
                                profile.update(|p| p.profile.cooking_time = value);
                            }
                        }
                    />
                </label>

                <button
                    class="btn btn--dark profile-panel__save"
                    on:click=move |_| do_save()
                    disabled=move || profile.with(|p| p.saving)
                >
                    {move || if profile.with(|p| p.saving) { "Saving..." } else { "Save Changes" }}
                </button>

                {move || {
                    profile
                        .with(|p| p.notice.clone())
                        .map(|notice| view! { <div class="profile-panel__notice">{notice}</div> })
                }}
            </div>
        </div>
    }
}
