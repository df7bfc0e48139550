//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as Back, LuBookOpen as Explain, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuCircleHelp as Quiz, LuMoon as Moon,
        LuPencil as Exercises, LuSun as Sun,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as Back, BsBookHalf as Explain, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsMoonStarsFill as Moon, BsPencilSquare as Exercises,
        BsQuestionCircle as Quiz, BsSunFill as Sun,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BACK, Back);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(MOON, Moon);
themed_icon!(SUN, Sun);
themed_icon!(EXPLAIN, Explain);
themed_icon!(QUIZ, Quiz);
themed_icon!(EXERCISES, Exercises);
