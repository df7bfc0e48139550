//! Persisted user preferences.
//!
//! The only preference is the color theme, stored as `"light"` or `"dark"`
//! under a single key.

use crate::config::THEME_STORAGE_KEY;
use crate::core::error::StorageError;
use crate::models::Theme;

/// Key/value storage for preferences (localStorage in the browser).
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Theme stored by a previous visit, dark if nothing usable is stored.
pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    Theme::from_preference(store.read(THEME_STORAGE_KEY).as_deref())
}

/// Flip the theme and persist the new value.
///
/// The flipped theme is returned even if persisting fails, so the page
/// still switches; the error is logged.
pub fn toggle_theme(current: Theme, store: &impl PreferenceStore) -> Theme {
    let next = current.toggled();
    if let Err(err) = store.write(THEME_STORAGE_KEY, next.as_str()) {
        tracing::warn!(theme = next.as_str(), error = %err, "theme preference not saved");
    }
    next
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::SaveFailed);
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_defaults_to_dark() {
        assert_eq!(load_theme(&MemoryStore::default()), Theme::Dark);

        let store = MemoryStore::default();
        store.write(THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::default();

        let theme = toggle_theme(load_theme(&store), &store);
        assert_eq!(theme, Theme::Light);
        assert_eq!(store.read(THEME_STORAGE_KEY).as_deref(), Some("light"));
        assert_eq!(load_theme(&store), Theme::Light);

        let theme = toggle_theme(theme, &store);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.read(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_survives_storage_failure() {
        let store = MemoryStore {
            read_only: true,
            ..Default::default()
        };
        assert_eq!(toggle_theme(Theme::Dark, &store), Theme::Light);
        assert_eq!(load_theme(&store), Theme::Dark);
    }
}
