use leptos::prelude::*;

use crate::models::{OutputLine, OutputLineData};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.data {
        OutputLineData::Command(input) => view! {
            <div class=css::command>
                <span class=css::prompt>"$ "</span>
                <span>{input}</span>
            </div>
        }
        .into_any(),
        OutputLineData::Text(text) => view! {
            <div class=css::line>{text}</div>
        }
        .into_any(),
        OutputLineData::Error(text) => view! {
            <div class=format!("{} {}", css::line, css::error)>{text}</div>
        }
        .into_any(),
    }
}
