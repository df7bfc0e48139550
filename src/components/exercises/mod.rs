//! Practice exercises with show/hide solutions.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::BackBar;
use crate::config::MATH_CONTENT_CLASS;
use crate::core::ExerciseView;
use crate::models::StudyMode;

stylance::import_crate_style!(css, "src/components/exercises/exercises.module.css");

#[component]
pub fn ExercisesView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let title = Signal::derive(move || {
        ctx.topic
            .with(|t| t.as_ref().map(|t| StudyMode::Exercises.title(&t.title)))
            .unwrap_or_default()
    });

    let cards = Memo::new(move |_| {
        ctx.topic.with(|topic| {
            topic
                .as_ref()
                .map(|t| ctx.exercises.with(|board| board.views(&t.exercises)))
                .unwrap_or_default()
        })
    });

    view! {
        <div class=css::exercises>
            <BackBar title=title />
            <Show
                when=move || !cards.with(Vec::is_empty)
                fallback=|| view! { <p class=css::empty>"This topic has no exercises."</p> }
            >
                {move || cards.get().into_iter().map(|card| view! { <ExerciseCard card=card /> }).collect::<Vec<_>>()}
            </Show>
        </div>
    }
}

#[component]
fn ExerciseCard(card: ExerciseView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let index = card.index;
    let revealed = card.revealed;
    let solution = card.solution;

    view! {
        <div class=css::card>
            <h3>{card.heading}</h3>
            <div class=css::problem>
                <strong>"Problem:"</strong>
                <p class=MATH_CONTENT_CLASS inner_html=card.problem />
            </div>
            <button class=css::toggle on:click=move |_| ctx.toggle_solution(index)>
                {card.toggle_label}
            </button>
            <Show when=move || revealed>
                <div
                    class=format!("{} {MATH_CONTENT_CLASS}", css::solution)
                    inner_html=solution.clone()
                />
            </Show>
        </div>
    }
}
