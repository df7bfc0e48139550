//! localStorage-backed preference store.

use super::dom;
use crate::core::error::StorageError;
use crate::core::preferences::PreferenceStore;

/// Preferences kept in the browser's localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPreferences;

impl PreferenceStore for BrowserPreferences {
    fn read(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::SaveFailed)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::config::THEME_STORAGE_KEY;
    use crate::core::preferences::{load_theme, toggle_theme};
    use crate::models::Theme;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_theme_survives_reload() {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item(THEME_STORAGE_KEY);
        }
        assert_eq!(load_theme(&BrowserPreferences), Theme::Dark);

        let theme = toggle_theme(Theme::Dark, &BrowserPreferences);
        assert_eq!(theme, Theme::Light);
        assert_eq!(
            BrowserPreferences.read(THEME_STORAGE_KEY).as_deref(),
            Some("light")
        );
        assert_eq!(load_theme(&BrowserPreferences), Theme::Light);
    }
}
