//! Application header with the theme toggle.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::Theme;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let theme = ctx.theme;
    let toggle_title = Signal::derive(move || theme.get().toggle_title());

    view! {
        <header class=css::header>
            <button class=css::brand on:click=move |_| ctx.show_selector()>
                {APP_NAME}
            </button>
            <button
                class=css::themeToggle
                on:click=move |_| ctx.toggle_theme()
                title=toggle_title
            >
                {move || match theme.get() {
                    Theme::Dark => view! { <Icon icon=ic::MOON /> }.into_any(),
                    Theme::Light => view! { <Icon icon=ic::SUN /> }.into_any(),
                }}
            </button>
        </header>
    }
}
