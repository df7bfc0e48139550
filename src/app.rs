//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the
//! application-level actions that tie the core state machines to signals.

use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{ExercisesView, ExplanationView, Header, QuizView, TopicSelector};
use crate::config::{CONTENT_BASE_URL, CONTENT_TRUST, DARK_THEME_CLASS};
use crate::core::{ContentLoader, ExerciseBoard, Navigator, QuizSession, RequestTicket, preferences};
use crate::models::{StudyMode, Theme, Topic, TopicsIndex, View};
use crate::utils::{BrowserPreferences, HttpSource, dom, render_math};

/// Loader shared by every view for the lifetime of the page.
type Loader = Rc<ContentLoader<HttpSource>>;

/// Message shown when a topic cannot be opened.
const TOPIC_LOAD_ALERT: &str = "Error loading topic data. Please check console for details.";

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap handles into the reactive arena.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active view and topic request generation.
    pub nav: RwSignal<Navigator>,
    /// Current color theme.
    pub theme: RwSignal<Theme>,
    /// Topics index; `None` until (and unless) it loads.
    pub index: RwSignal<Option<Arc<TopicsIndex>>>,
    /// Topic shown by the explanation, quiz and exercises views.
    pub topic: RwSignal<Option<Arc<Topic>>>,
    /// Quiz in progress; discarded when leaving the quiz view.
    pub quiz: RwSignal<Option<QuizSession>>,
    /// Solution visibility for the exercises view.
    pub exercises: RwSignal<ExerciseBoard>,
    loader: StoredValue<Loader, LocalStorage>,
}

impl AppContext {
    /// Creates a new application context.
    ///
    /// The theme is read from the stored preference; everything else
    /// starts empty on the topic selector.
    pub fn new() -> Self {
        let loader = ContentLoader::new(HttpSource::new(CONTENT_BASE_URL), CONTENT_TRUST);

        Self {
            nav: RwSignal::new(Navigator::default()),
            theme: RwSignal::new(preferences::load_theme(&BrowserPreferences)),
            index: RwSignal::new(None),
            topic: RwSignal::new(None),
            quiz: RwSignal::new(None),
            exercises: RwSignal::new(ExerciseBoard::default()),
            loader: StoredValue::new_local(Rc::new(loader)),
        }
    }

    /// Fetch the topics index in the background.
    ///
    /// Failures are logged by the loader; the selector stays empty.
    pub fn load_index(&self) {
        let ctx = *self;
        let loader = self.loader.get_value();
        spawn_local(async move {
            if let Ok(index) = loader.load_index().await {
                ctx.index.set(Some(index));
            }
        });
    }

    pub fn toggle_theme(&self) {
        let next = preferences::toggle_theme(self.theme.get_untracked(), &BrowserPreferences);
        tracing::info!(theme = next.as_str(), "theme toggled");
        self.theme.set(next);
    }

    /// Return to the topic selector, discarding any quiz in progress.
    pub fn show_selector(&self) {
        self.nav.update(|nav| nav.show(View::Selector));
        self.quiz.set(None);
    }

    /// Load a topic and open it in the requested mode.
    ///
    /// If the user has navigated elsewhere by the time the topic arrives,
    /// it is cached but not shown.
    pub fn select_topic(&self, id: String, mode: StudyMode) {
        let Some(ticket) = self.nav.try_update_untracked(Navigator::begin_request) else {
            return;
        };

        let ctx = *self;
        let loader = self.loader.get_value();
        spawn_local(async move {
            let result = loader.load_topic(&id).await;
            let current = ctx.nav.with_untracked(|nav| nav.is_current(ticket));

            match result {
                Ok(topic) if current => ctx.open(topic, mode, ticket),
                Ok(_) => tracing::debug!(topic = %id, "discarding superseded topic request"),
                Err(_) if current => dom::alert(TOPIC_LOAD_ALERT),
                Err(_) => {}
            }
        });
    }

    fn open(&self, topic: Arc<Topic>, mode: StudyMode, ticket: RequestTicket) {
        match mode {
            StudyMode::Explain => {}
            StudyMode::Quiz => match QuizSession::new(topic.clone()) {
                Ok(session) => self.quiz.set(Some(session)),
                Err(err) => {
                    tracing::warn!(topic = %topic.id, error = %err, "quiz unavailable");
                    self.quiz.set(None);
                }
            },
            StudyMode::Exercises => self
                .exercises
                .set(ExerciseBoard::new(topic.exercises.len())),
        }

        self.topic.set(Some(topic));
        self.nav.update(|nav| {
            nav.complete(ticket, mode.view());
        });
    }

    // ------------------------------------------------------------------------
    // Quiz actions
    // ------------------------------------------------------------------------

    /// Answer the question currently shown.
    pub fn select_option(&self, option: usize) {
        self.quiz.update(|quiz| {
            if let Some(session) = quiz
                && let Err(err) = session.select_current(option)
            {
                tracing::debug!(error = %err, "selection ignored");
            }
        });
    }

    pub fn next_question(&self) {
        self.quiz.update(|quiz| {
            if let Some(session) = quiz
                && let Err(err) = session.next()
            {
                tracing::debug!(error = %err, "next ignored");
            }
        });
    }

    pub fn previous_question(&self) {
        self.quiz.update(|quiz| {
            if let Some(session) = quiz
                && let Err(err) = session.previous()
            {
                tracing::debug!(error = %err, "previous ignored");
            }
        });
    }

    // ------------------------------------------------------------------------
    // Exercise actions
    // ------------------------------------------------------------------------

    pub fn toggle_solution(&self, index: usize) {
        self.exercises.update(|board| {
            board.toggle(index);
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts loading the topics index
/// - Keeps the body theme class and math typesetting in sync with state
/// - Renders the header and the four views
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.load_index();

    let active = Memo::new(move |_| ctx.nav.with(Navigator::active));

    Effect::new(move |_| {
        dom::set_body_class(DARK_THEME_CLASS, ctx.theme.get().is_dark());
    });

    // Re-typeset math after any content change
    Effect::new(move |_| {
        ctx.nav.track();
        ctx.index.track();
        ctx.topic.track();
        ctx.quiz.track();
        ctx.exercises.track();
        leptos::leptos_dom::helpers::request_animation_frame(render_math);
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="error-page">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Header />
            <main class="container">
                <section class="view" class:active=move || active.get() == View::Selector>
                    <TopicSelector />
                </section>
                <section class="view" class:active=move || active.get() == View::Explanation>
                    <ExplanationView />
                </section>
                <section class="view" class:active=move || active.get() == View::Quiz>
                    <QuizView />
                </section>
                <section class="view" class:active=move || active.get() == View::Exercises>
                    <ExercisesView />
                </section>
            </main>
        </ErrorBoundary>
    }
}
