//! Scripted chat widget.
//!
//! User messages are appended immediately; a canned system reply follows
//! after [`REPLY_DELAY_MS`](crate::config::chat::REPLY_DELAY_MS).

use gloo_timers::callback::Timeout;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::chat::REPLY_DELAY_MS;
use crate::core::chat::{ChatMessage, Sender, initial_messages, pick_reply, user_message};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/chat/chat.module.css");

fn sender_class(sender: Sender) -> &'static str {
    match sender {
        Sender::System => css::system,
        Sender::User => css::user,
    }
}

/// Queue the canned reply. The timer fires once on the UI thread.
fn schedule_reply(messages: RwSignal<Vec<ChatMessage>>) {
    Timeout::new(REPLY_DELAY_MS, move || {
        let reply = pick_reply(&mut rand::thread_rng());
        // The panel may be gone by the time the timer fires
        let _ = messages.try_update(|m| m.push(reply));
    })
    .forget();
}

#[component]
pub fn Chat() -> impl IntoView {
    let messages = RwSignal::new(initial_messages());
    let (draft, set_draft) = signal(String::new());
    let list_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        messages.track();
        if let Some(el) = list_ref.get() {
            dom::scroll_to_bottom(&el);
        }
    });

    let send = move || {
        let Some(message) = draft.with_untracked(|d| user_message(d)) else {
            return;
        };
        messages.update(|m| m.push(message));
        set_draft.set(String::new());
        schedule_reply(messages);
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class=css::panel>
            <div class=css::title>
                <span class=css::titleIcon><Icon icon=ic::CHAT /></span>
                "Assistant"
            </div>
            <div id="chat-messages" node_ref=list_ref class=css::messages>
                <For
                    each=move || messages.get()
                    key=|message| message.id
                    children=|message| view! {
                        <div class=format!("{} {}", css::message, sender_class(message.sender))
                            data-sender=message.sender.as_str()>
                            {message.text}
                        </div>
                    }
                />
            </div>
            <div class=css::composer>
                <input
                    id="chat-input"
                    type="text"
                    class=css::input
                    placeholder="Écrivez votre message..."
                    autocomplete="off"
                    prop:value=draft
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=handle_keydown
                />
                <button
                    id="send-button"
                    class=css::send
                    aria-label="Envoyer"
                    on:click=move |_| send()
                >
                    <Icon icon=ic::SEND />
                </button>
            </div>
        </div>
    }
}
