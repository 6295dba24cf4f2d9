//! Code display with a line-number gutter and file tabs.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::editor::{EditorTab, line_numbers};

stylance::import_crate_style!(css, "src/components/editor/editor.module.css");

#[component]
pub fn Editor() -> impl IntoView {
    let active = RwSignal::new(EditorTab::default());
    let (code, set_code) = signal(EditorTab::default().content().to_string());
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();
    let gutter_ref = NodeRef::<leptos::html::Div>::new();

    // Switching tabs replaces whatever was typed
    let select_tab = move |tab: EditorTab| {
        active.set(tab);
        set_code.set(tab.content().to_string());
    };

    let sync_scroll = move |_| {
        if let (Some(area), Some(gutter)) = (textarea_ref.get(), gutter_ref.get()) {
            gutter.set_scroll_top(area.scroll_top());
        }
    };

    let tabs = EditorTab::ALL
        .into_iter()
        .map(|tab| {
            let is_active = move || active.get() == tab;
            view! {
                <button
                    class=move || {
                        if is_active() {
                            format!("{} {}", css::tab, css::active)
                        } else {
                            css::tab.to_string()
                        }
                    }
                    role="tab"
                    aria-selected=move || is_active().to_string()
                    on:click=move |_| select_tab(tab)
                >
                    <span class=css::tabIcon><Icon icon=ic::FILE_CODE /></span>
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class=css::panel>
            <div id="file-tabs" class=css::tabs role="tablist">{tabs}</div>
            <div class=css::body>
                <div id="line-numbers" node_ref=gutter_ref class=css::gutter aria-hidden="true">
                    {move || {
                        code.with(|c| {
                            line_numbers(c)
                                .map(|n| view! { <div class=css::lineNumber>{n}</div> })
                                .collect_view()
                        })
                    }}
                </div>
                <textarea
                    id="code-editor"
                    node_ref=textarea_ref
                    class=css::code
                    spellcheck="false"
                    wrap="off"
                    prop:value=code
                    on:input=move |ev| set_code.set(event_target_value(&ev))
                    on:scroll=sync_scroll
                ></textarea>
            </div>
        </div>
    }
}
