//! Title bar with the light/dark toggle.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::Theme;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let theme = ctx.theme;
    let toggle_label = Signal::derive(move || theme.get().toggle_label());
    // Moon offers dark mode, sun offers light mode
    let toggle_icon = move || match theme.get() {
        Theme::Light => view! { <Icon icon=ic::MOON /> },
        Theme::Dark => view! { <Icon icon=ic::SUN /> },
    };

    view! {
        <header class=css::bar>
            <span class=css::brand>
                <span class=css::brandIcon><Icon icon=ic::CODE /></span>
                {APP_NAME}
            </span>
            <button
                id="theme-toggle"
                class=css::toggle
                on:click=move |_| ctx.toggle_theme()
                title=toggle_label
                aria-label=toggle_label
            >
                {toggle_icon}
            </button>
        </header>
    }
}
