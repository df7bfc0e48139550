//! Title bar shared by the topic views, with a back button to the selector.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/back_bar.module.css");

#[component]
pub fn BackBar(#[prop(into)] title: Signal<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::bar>
            <button class=css::back on:click=move |_| ctx.show_selector() title="Back to topics">
                <Icon icon=ic::BACK />
                <span>"Back"</span>
            </button>
            <h2 class=css::title>{title}</h2>
        </div>
    }
}
