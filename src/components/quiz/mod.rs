//! Quiz view: one question at a time with immediate feedback.
//!
//! Everything rendered here comes from [`QuizSession::view`], so a
//! revisited question shows exactly the feedback it had when answered.
//! Answered options get `pointer-events: none` as well as losing their
//! click handler.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::BackBar;
use crate::components::icons as ic;
use crate::config::MATH_CONTENT_CLASS;
use crate::core::{OptionMark, QuestionView, QuizSession, Score};
use crate::models::StudyMode;

stylance::import_crate_style!(css, "src/components/quiz/quiz.module.css");

fn option_class(mark: OptionMark, selectable: bool) -> String {
    let mut class = format!("{} {MATH_CONTENT_CLASS}", css::option);
    match mark {
        OptionMark::Plain => {}
        OptionMark::Correct => {
            class.push(' ');
            class.push_str(css::correct);
        }
        OptionMark::Incorrect => {
            class.push(' ');
            class.push_str(css::incorrect);
        }
    }
    if !selectable {
        class.push(' ');
        class.push_str(css::locked);
    }
    class
}

#[component]
pub fn QuizView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let title = Signal::derive(move || {
        ctx.topic
            .with(|t| t.as_ref().map(|t| StudyMode::Quiz.title(&t.title)))
            .unwrap_or_default()
    });
    let question = Memo::new(move |_| ctx.quiz.with(|q| q.as_ref().map(QuizSession::view)));
    let score = Memo::new(move |_| ctx.quiz.with(|q| q.as_ref().map(QuizSession::score)));

    view! {
        <div class=css::quiz>
            <BackBar title=title />
            {move || match question.get() {
                Some(current) => view! { <QuestionCard question=current /> }.into_any(),
                None => view! {
                    <p class=css::empty>"This topic has no quiz questions."</p>
                }.into_any(),
            }}
            {move || score.get().filter(Score::is_complete).map(|s| view! {
                <p class=css::score>
                    {format!("You answered {} of {} correctly.", s.correct, s.total)}
                </p>
            })}
        </div>
    }
}

#[component]
fn QuestionCard(question: QuestionView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let options = question
        .options
        .into_iter()
        .map(|option| {
            let index = option.index;
            let selectable = option.selectable;
            view! {
                <div
                    class=option_class(option.mark, selectable)
                    on:click=move |_| {
                        if selectable {
                            ctx.select_option(index);
                        }
                    }
                    inner_html=option.label
                />
            }
        })
        .collect::<Vec<_>>();

    let explanation = question.explanation.map(|text| {
        view! {
            <div class=css::explanation>
                <strong>"Explanation: "</strong>
                <span class=MATH_CONTENT_CLASS inner_html=text />
            </div>
        }
    });

    let next_enabled = question.next_enabled;
    let show_previous = question.show_previous;
    let show_next = question.show_next;

    view! {
        <div class=css::question>
            <h3 class=css::heading>{question.heading}</h3>
            <p class=format!("{} {MATH_CONTENT_CLASS}", css::prompt) inner_html=question.prompt />
            <div class=css::options>{options}</div>
            {explanation}
            <div class=css::actions>
                <Show when=move || show_previous>
                    <button class=css::navButton on:click=move |_| ctx.previous_question()>
                        <Icon icon=ic::CHEVRON_LEFT />
                        <span>"Previous"</span>
                    </button>
                </Show>
                <Show when=move || show_next>
                    <button
                        class=css::navButtonPrimary
                        disabled=!next_enabled
                        on:click=move |_| ctx.next_question()
                    >
                        <span>"Next"</span>
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                </Show>
            </div>
        </div>
    }
}
