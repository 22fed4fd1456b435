//! Chat panel showing the conversation and the message input.
//!
//! Assistant turns render as Markdown; the trailing turn updates in place
//! while its text is still streaming. The input is disabled while a send is
//! in flight, which is the only guard against duplicate submission.

use leptos::prelude::*;

#[cfg(feature = "web")]
use crate::net::chat_client;
use crate::net::config::ServiceConfig;
use crate::state::chat::{ChatState, ChatStatus, Role};
use crate::state::profile::ProfileState;
use crate::state::session::SessionState;
use crate::util::markdown;

/// Chat panel with message history, streaming updates, and the draft input.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let config = expect_context::<StoredValue<ServiceConfig>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();

    let turns_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest turn in view as history grows and streamed text lands.
    Effect::new(move || {
        let _ = chat.with(|c| (c.turns.len(), c.turns.last().map(|t| t.text.len())));

        #[cfg(feature = "web")]
        {
            if let Some(el) = turns_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some((message, history)) = chat.try_update(ChatState::begin_send).flatten() else {
            return;
        };
        let constraints = profile.with_untracked(|p| p.profile.constraints());

        #[cfg(feature = "web")]
        chat_client::spawn_generate(config.get_value(), message, history, constraints, chat);

        #[cfg(not(feature = "web"))]
        {
            let _ = (config, message, history, constraints);
            chat.update(ChatState::fail_stream);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let sending = move || chat.with(|c| c.status != ChatStatus::Idle);
    let can_send = move || chat.with(ChatState::can_submit);

    let placeholder = move || {
        if chat.with(|c| c.awaiting_follow_up) {
            "Please clarify the question above (e.g., 'tree nuts only' or 'seeds included')"
        } else {
            "Ask for a recipe..."
        }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__turns" node_ref=turns_ref>
                {move || {
                    let username = session.with(|s| s.username().unwrap_or_default().to_owned());
                    chat.with(|c| c.turns.is_empty()).then(|| {
                        view! {
                            <div class="chat-panel__empty">
                                <p class="chat-panel__empty-title">{format!("Hello {username}")}</p>
                                <p>"I'm ready to help you find safe recipes."</p>
                            </div>
                        }
                    })
                }}

                {move || {
                    chat.get()
                        .turns
                        .iter()
                        .map(|turn| {
                            let is_user = turn.role == Role::User;
                            let bubble = if is_user {
                                view! { <div class="chat-panel__body">{turn.text.clone()}</div> }.into_any()
                            } else {
                                view! {
                                    <div class="chat-panel__body" inner_html=markdown::to_html(&turn.text)></div>
                                }
                                    .into_any()
                            };
                            view! {
                                <div class="chat-panel__turn" class:chat-panel__turn--user=is_user>
                                    <div class="chat-panel__bubble" class:chat-panel__bubble--user=is_user>
                                        {turn
                                            .follow_up
                                            .then(|| {
                                                view! {
                                                    <div class="chat-panel__follow-up">
                                                        "Follow-up question. Please clarify."
                                                    </div>
                                                }
                                            })}
                                        {bubble}
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}

                {move || {
                    (chat.with(|c| c.status == ChatStatus::Sending))
                        .then(|| view! { <div class="chat-panel__thinking">"Thinking..."</div> })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || chat.with(|c| c.draft.clone())
                    on:input=move |ev| chat.update(|c| c.draft = event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=sending
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=move |_| do_send()
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
