//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Electrical Machines Course Assistant";

/// Short tagline shown under the topic selector heading.
pub const APP_TAGLINE: &str = "Explanations, quizzes and practice exercises";

// =============================================================================
// Content Configuration
// =============================================================================

/// Base URL prepended to every content path. Empty means same origin.
pub const CONTENT_BASE_URL: &str = "";

/// Directory holding topic documents (relative to the base URL).
pub const DATA_DIR: &str = "data";

/// Topics index document path.
pub const TOPICS_INDEX_PATH: &str = "data/topics.json";

/// Category assigned to index entries that do not declare one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Build the document path for a topic id.
pub fn topic_path(id: &str) -> String {
    format!("{}/{}.json", DATA_DIR, id)
}

/// How markup from content documents is treated before insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum ContentTrust {
    /// Run all markup through the HTML sanitizer on ingestion.
    #[default]
    Sanitize,
    /// Insert markup verbatim. Only for content from trusted authors.
    Trusted,
}

/// Trust policy applied by the content loader.
pub const CONTENT_TRUST: ContentTrust = ContentTrust::Sanitize;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Preferences
// =============================================================================

/// localStorage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Body class applied while the dark theme is active.
pub const DARK_THEME_CLASS: &str = "dark-theme";

// =============================================================================
// Math Rendering
// =============================================================================

/// Math delimiters handed to the typesetter, as (left, right, display).
///
/// Display delimiters must come first so `$$` is not consumed as two
/// inline delimiters.
pub const MATH_DELIMITERS: &[(&str, &str, bool)] = &[("$$", "$$", true), ("$", "$", false)];

/// Global function installed by KaTeX's auto-render extension.
pub const MATH_RENDER_FN: &str = "renderMathInElement";

/// Class marking elements whose children come from content markup.
///
/// Only these are typeset; text owned by the view layer (titles, headings)
/// is never handed to KaTeX.
pub const MATH_CONTENT_CLASS: &str = "math-content";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_path() {
        assert_eq!(topic_path("dc-motors"), "data/dc-motors.json");
    }

    #[test]
    fn test_display_delimiters_first() {
        assert_eq!(MATH_DELIMITERS[0], ("$$", "$$", true));
    }
}
