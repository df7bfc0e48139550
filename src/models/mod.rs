//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Topic`], [`Question`], [`Exercise`] - Study material documents
//! - [`TopicsIndex`], [`CategoryGroup`] - Topic listing for the selector
//! - [`View`], [`StudyMode`] - View management
//! - [`Theme`] - Light/dark preference

mod content;
mod theme;
mod view;

pub use content::{CategoryGroup, Exercise, Question, Topic, TopicEntry, TopicsIndex};
#[cfg(test)]
pub(crate) use content::fixtures;
pub use theme::Theme;
pub use view::{StudyMode, View};
