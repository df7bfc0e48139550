//! Core logic for the course viewer.
//!
//! This module provides:
//! - [`ContentLoader`] fetching and memoizing topic documents
//! - [`QuizSession`] the quiz navigation and answer state machine
//! - [`ExerciseBoard`] solution visibility for practice exercises
//! - [`Navigator`] active view tracking
//! - [`preferences`] theme persistence

pub mod error;
mod exercises;
mod loader;
mod navigation;
pub mod preferences;
mod quiz;

pub use exercises::{ExerciseBoard, ExerciseView};
pub use loader::{ContentLoader, ContentSource};
pub use navigation::{Navigator, RequestTicket};
pub use quiz::{OptionMark, QuestionView, QuizSession, Score};
