//! Explanation view for the current topic.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::BackBar;
use crate::config::MATH_CONTENT_CLASS;
use crate::models::StudyMode;

stylance::import_crate_style!(css, "src/components/explanation/explanation.module.css");

#[component]
pub fn ExplanationView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let title = Signal::derive(move || {
        ctx.topic
            .with(|t| t.as_ref().map(|t| StudyMode::Explain.title(&t.title)))
            .unwrap_or_default()
    });
    let body = Signal::derive(move || {
        ctx.topic
            .with(|t| t.as_ref().map(|t| t.explanation.clone()))
            .unwrap_or_default()
    });

    view! {
        <div class=css::explanation>
            <BackBar title=title />
            <article class=format!("{} {MATH_CONTENT_CLASS}", css::content) inner_html=body />
        </div>
    }
}
