//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`HttpSource`] - Content fetching with timeout
//! - [`BrowserPreferences`] - localStorage-backed preferences
//! - [`render_math`] - KaTeX typesetting after DOM updates

pub mod dom;
mod fetch;
mod math;
mod storage;

pub use fetch::HttpSource;
pub use math::render_math;
pub use storage::BrowserPreferences;
