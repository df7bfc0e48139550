//! Topic selector: the topics index grouped by category.
//!
//! Each topic card offers the three study modes. Nothing is shown until
//! the index has loaded; if it never loads the list stays empty.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::{CategoryGroup, StudyMode, TopicEntry};

stylance::import_crate_style!(css, "src/components/selector/selector.module.css");

fn mode_icon(mode: StudyMode) -> icondata::Icon {
    match mode {
        StudyMode::Explain => ic::EXPLAIN,
        StudyMode::Quiz => ic::QUIZ,
        StudyMode::Exercises => ic::EXERCISES,
    }
}

#[component]
pub fn TopicSelector() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let groups = Memo::new(move |_| {
        ctx.index
            .with(|index| index.as_ref().map(|i| i.by_category()).unwrap_or_default())
    });

    view! {
        <div class=css::selector>
            <div class=css::intro>
                <h1>{APP_NAME}</h1>
                <p>{APP_TAGLINE}</p>
            </div>
            <Show
                when=move || !groups.with(Vec::is_empty)
                fallback=|| view! { <p class=css::empty>"No topics available."</p> }
            >
                {move || groups.get().into_iter().map(|group| view! { <Category group=group /> }).collect::<Vec<_>>()}
            </Show>
        </div>
    }
}

#[component]
fn Category(group: CategoryGroup) -> impl IntoView {
    view! {
        <section class=css::category>
            <h2 class=css::categoryName>{group.name}</h2>
            <div class=css::grid>
                {group.topics.into_iter().map(|topic| view! { <TopicCard topic=topic /> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn TopicCard(topic: TopicEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let buttons = StudyMode::ALL
        .into_iter()
        .map(|mode| {
            let id = topic.id.clone();
            view! {
                <button
                    class=css::modeButton
                    on:click=move |_| ctx.select_topic(id.clone(), mode)
                >
                    <Icon icon=mode_icon(mode) />
                    <span>{mode.label()}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <article class=css::card>
            <h3 class=css::cardTitle>{topic.title}</h3>
            <div class=css::modes>{buttons}</div>
        </article>
    }
}
