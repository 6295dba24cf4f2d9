//! Terminal view component.
//!
//! Submitted lines are echoed, interpreted, and the result is applied to the
//! screen: appended, or wiping everything for `clear`.

use leptos::prelude::*;

use crate::app::{AppContext, Screen};
use crate::components::terminal::{Input, Output};
use crate::core::{BrowserClock, interpret};
use crate::models::OutputLine;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

/// Auto-scroll output to bottom when the screen changes.
fn setup_autoscroll_effect(screen: RwSignal<Screen>, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        screen.track();
        if let Some(el) = output_ref.get() {
            dom::scroll_to_bottom(&el);
        }
    });
}

fn create_submit_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |input: String| {
        let line = input.trim();
        ctx.terminal.push_output(OutputLine::command(line));
        ctx.terminal.apply(interpret(line, &BrowserClock));
    })
}

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let output_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let screen = ctx.terminal.screen;

    setup_autoscroll_effect(screen, output_ref);
    let on_submit = create_submit_callback(ctx);

    let focus_input = move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    view! {
        <div id="terminal" class=css::container on:click=focus_input>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || screen.with(Screen::to_vec)
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>
            <div class=css::inputArea>
                <Input input_ref=input_ref on_submit=on_submit />
            </div>
        </div>
    }
}
