//! Light/dark theme preference.

/// Color theme for the whole document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    /// Default when no preference has been stored.
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored preference value.
    ///
    /// Only the exact value `"light"` selects the light theme; anything
    /// else, including an absent value, falls back to dark.
    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Tooltip for the toggle button while this theme is active.
    pub fn toggle_title(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_preference() {
        assert_eq!(Theme::from_preference(Some("light")), Theme::Light);
        assert_eq!(Theme::from_preference(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_preference(Some("Light")), Theme::Dark);
        assert_eq!(Theme::from_preference(Some("")), Theme::Dark);
        assert_eq!(Theme::from_preference(None), Theme::Dark);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(
            Theme::from_preference(Some(Theme::Light.as_str())),
            Theme::Light
        );
    }
}
