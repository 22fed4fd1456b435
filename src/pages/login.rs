//! Authentication view driving the four-stage flow: login, register,
//! forgot-password, and reset-code.
//!
//! Every submit triggers exactly one network call; the submit control is
//! disabled while it is in flight. Success on login hands the identity to
//! the session; the other flows surface a notice and move stages via the
//! named operations on [`AuthState`].

use leptos::prelude::*;

use crate::net::config::ServiceConfig;
use crate::state::auth::{AuthStage, AuthState};
use crate::state::session::SessionState;
#[cfg(feature = "web")]
use crate::util::session_store;

/// Login page with the four-stage account flow.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<StoredValue<ServiceConfig>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let stage = move || auth.with(|a| a.stage);
    let busy = move || auth.with(|a| a.busy);

    let do_login = move || {
        if !auth.try_update(AuthState::begin_submit).unwrap_or(false) {
            return;
        }
        let form = auth.with_untracked(|a| a.form.clone());

        #[cfg(feature = "web")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, &form.username, &form.password).await {
                    Ok(()) => {
                        session_store::save(&form.username);
                        session.update(|s| s.sign_in(&form.username));
                        // The auth flow resets so the next visit starts at
                        // a clean login stage.
                        auth.set(AuthState::default());
                    }
                    Err(err) => auth.update(|a| a.fail(err.user_message())),
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (config, session, form);
            auth.update(|a| a.fail(crate::net::types::ApiError::Connection.user_message()));
        }
    };

    let do_register = move || {
        if !auth.try_update(AuthState::begin_submit).unwrap_or(false) {
            return;
        }
        let form = auth.with_untracked(|a| a.form.clone());

        #[cfg(feature = "web")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&config, &form.username, &form.email, &form.password).await {
                    Ok(()) => auth.update(AuthState::register_succeeded),
                    Err(err) => auth.update(|a| a.fail(err.user_message())),
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (config, form);
            auth.update(|a| a.fail(crate::net::types::ApiError::Connection.user_message()));
        }
    };

    let do_forgot = move || {
        if !auth.try_update(AuthState::begin_submit).unwrap_or(false) {
            return;
        }
        let form = auth.with_untracked(|a| a.form.clone());

        #[cfg(feature = "web")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::forgot_password(&config, &form.email).await {
                    Ok(()) => auth.update(AuthState::forgot_succeeded),
                    Err(err) => auth.update(|a| a.fail(err.user_message())),
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (config, form);
            auth.update(|a| a.fail(crate::net::types::ApiError::Connection.user_message()));
        }
    };

    let do_reset = move || {
        if !auth.try_update(AuthState::begin_submit).unwrap_or(false) {
            return;
        }
        let form = auth.with_untracked(|a| a.form.clone());

        #[cfg(feature = "web")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(&config, &form.email, &form.code, &form.new_password).await {
                    Ok(()) => auth.update(AuthState::reset_succeeded),
                    Err(err) => auth.update(|a| a.fail(err.user_message())),
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (config, form);
            auth.update(|a| a.fail(crate::net::types::ApiError::Connection.user_message()));
        }
    };

    let heading = move || match stage() {
        AuthStage::Login => "Log In",
        AuthStage::Register => "Sign Up",
        AuthStage::Forgot => "Reset Password",
        AuthStage::Reset => "Enter Code",
    };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1 class="login-page__brand">"SafePlate"</h1>
                <h2 class="login-page__heading">{heading}</h2>

                <Show when=move || stage() == AuthStage::Login>
                    <div class="auth-form">
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || auth.with(|a| a.form.username.clone())
                            on:input=move |ev| auth.update(|a| a.form.username = event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    do_login();
                                }
                            }
                        />
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || auth.with(|a| a.form.password.clone())
                            on:input=move |ev| auth.update(|a| a.form.password = event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    do_login();
                                }
                            }
                        />
                        <div class="auth-form__aside">
                            <button
                                class="auth-form__link"
                                on:click=move |_| auth.update(|a| a.goto(AuthStage::Forgot))
                            >
                                "Forgot Password?"
                            </button>
                        </div>
                        <button class="btn btn--primary auth-form__submit" on:click=move |_| do_login() disabled=busy>
                            {move || if busy() { "..." } else { "Log In" }}
                        </button>
                        <p class="auth-form__footer">
                            "New? "
                            <button
                                class="auth-form__link auth-form__link--strong"
                                on:click=move |_| auth.update(|a| a.goto(AuthStage::Register))
                            >
                                "Create Account"
                            </button>
                        </p>
                    </div>
                </Show>

                <Show when=move || stage() == AuthStage::Register>
                    <div class="auth-form">
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Choose Username"
                            prop:value=move || auth.with(|a| a.form.username.clone())
                            on:input=move |ev| auth.update(|a| a.form.username = event_target_value(&ev))
                        />
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="Email Address"
                            prop:value=move || auth.with(|a| a.form.email.clone())
                            on:input=move |ev| auth.update(|a| a.form.email = event_target_value(&ev))
                        />
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || auth.with(|a| a.form.password.clone())
                            on:input=move |ev| auth.update(|a| a.form.password = event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    do_register();
                                }
                            }
                        />
                        <button class="btn btn--primary auth-form__submit" on:click=move |_| do_register() disabled=busy>
                            {move || if busy() { "..." } else { "Sign Up" }}
                        </button>
                        <p class="auth-form__footer">
                            <button
                                class="auth-form__link"
                                on:click=move |_| auth.update(|a| a.goto(AuthStage::Login))
                            >
                                "Back to Login"
                            </button>
                        </p>
                    </div>
                </Show>

                <Show when=move || stage() == AuthStage::Forgot>
                    <div class="auth-form">
                        <p class="auth-form__hint">"Enter your email to receive a reset code."</p>
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="Email Address"
                            prop:value=move || auth.with(|a| a.form.email.clone())
                            on:input=move |ev| auth.update(|a| a.form.email = event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    do_forgot();
                                }
                            }
                        />
                        <button class="btn btn--dark auth-form__submit" on:click=move |_| do_forgot() disabled=busy>
                            {move || if busy() { "Sending..." } else { "Send Code" }}
                        </button>
                        <p class="auth-form__footer">
                            <button
                                class="auth-form__link"
                                on:click=move |_| auth.update(|a| a.goto(AuthStage::Login))
                            >
                                "Cancel"
                            </button>
                        </p>
                    </div>
                </Show>

                <Show when=move || stage() == AuthStage::Reset>
                    <div class="auth-form">
                        <p class="auth-form__hint">
                            {move || {
                                let email = auth.with(|a| a.form.email.clone());
                                format!("Check your email ({email}) for the code.")
                            }}
                        </p>
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="6-Digit Code"
                            prop:value=move || auth.with(|a| a.form.code.clone())
                            on:input=move |ev| auth.update(|a| a.form.code = event_target_value(&ev))
                        />
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="New Password"
                            prop:value=move || auth.with(|a| a.form.new_password.clone())
                            on:input=move |ev| auth.update(|a| a.form.new_password = event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    do_reset();
                                }
                            }
                        />
                        <button class="btn btn--danger auth-form__submit" on:click=move |_| do_reset() disabled=busy>
                            {move || if busy() { "Updating..." } else { "Set New Password" }}
                        </button>
                    </div>
                </Show>

                {move || {
                    auth.with(|a| a.message.clone())
                        .map(|message| view! { <div class="login-page__message">{message}</div> })
                }}
            </div>
        </div>
    }
}
