//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{HtmlElement, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get the document body.
#[inline]
pub fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Add or remove a class on the document body.
pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = body() else {
        return;
    };
    let classes = body.class_list();
    let result = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if result.is_err() {
        tracing::warn!(class, "failed to update body class");
    }
}

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}
