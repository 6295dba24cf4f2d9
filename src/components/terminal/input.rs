//! Terminal input line.

use leptos::{ev, prelude::*};

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Prompt plus text field; Enter submits the raw value and clears the field.
#[component]
pub fn Input(
    input_ref: NodeRef<leptos::html::Input>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let (value, set_value) = signal(String::new());

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_submit.run(value.get_untracked());
            set_value.set(String::new());
        }
    };

    view! {
        <div class=css::line>
            <span class=css::prompt>"$"</span>
            <input
                id="terminal-input"
                node_ref=input_ref
                type="text"
                class=css::input
                autocomplete="off"
                spellcheck="false"
                aria-label="Commande"
                prop:value=value
                on:input=move |ev| set_value.set(event_target_value(&ev))
                on:keydown=handle_keydown
            />
        </div>
    }
}
