//! UI components built with Leptos.
//!
//! - [`Header`] - Title bar with the theme toggle
//! - [`TopicSelector`] - Topics grouped by category
//! - [`ExplanationView`], [`QuizView`], [`ExercisesView`] - Study modes
//! - [`BackBar`] - Shared view title with a back button
//! - [`icons`] - Centralized icon definitions (change theme here)

mod back_bar;
pub mod exercises;
pub mod explanation;
pub mod header;
pub mod icons;
pub mod quiz;
pub mod selector;

pub use back_bar::BackBar;
pub use exercises::ExercisesView;
pub use explanation::ExplanationView;
pub use header::Header;
pub use quiz::QuizView;
pub use selector::TopicSelector;
