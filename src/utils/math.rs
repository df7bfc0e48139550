//! Bridge to the KaTeX auto-render extension.
//!
//! KaTeX is loaded by `index.html`; when it is missing every call here is
//! a no-op. Typesetting is limited to elements marked with
//! [`MATH_CONTENT_CLASS`]: KaTeX replaces the text nodes it renders, which
//! must never be nodes the view layer still updates.

use js_sys::{Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::{MATH_CONTENT_CLASS, MATH_DELIMITERS, MATH_RENDER_FN};

#[derive(Serialize)]
struct Delimiter {
    left: &'static str,
    right: &'static str,
    display: bool,
}

#[derive(Serialize)]
struct RenderOptions {
    delimiters: Vec<Delimiter>,
    #[serde(rename = "throwOnError")]
    throw_on_error: bool,
}

fn render_options() -> RenderOptions {
    RenderOptions {
        delimiters: MATH_DELIMITERS
            .iter()
            .map(|&(left, right, display)| Delimiter {
                left,
                right,
                display,
            })
            .collect(),
        throw_on_error: false,
    }
}

/// Typeset delimited math inside every content container.
pub fn render_math() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let Ok(render) = Reflect::get(&window, &JsValue::from_str(MATH_RENDER_FN)) else {
        return;
    };
    let Some(render) = render.dyn_ref::<Function>() else {
        return;
    };

    let options = match serde_wasm_bindgen::to_value(&render_options()) {
        Ok(options) => options,
        Err(err) => {
            tracing::warn!(error = %err, "failed to build math render options");
            return;
        }
    };

    let containers = document.get_elements_by_class_name(MATH_CONTENT_CLASS);
    for i in 0..containers.length() {
        let Some(container) = containers.item(i) else {
            continue;
        };
        if let Err(err) = render.call2(&JsValue::NULL, &container, &options) {
            tracing::warn!(error = ?err, "math rendering failed");
        }
    }
}
