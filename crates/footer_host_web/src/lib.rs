//! Browser (`wasm32`) implementations of [`footer_host`] contracts.
//!
//! Each adapter compiles on every target; outside `wasm32` they fall back to inert or
//! process-environment behavior so the UI crates stay testable natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod analytics;
pub mod config;
pub mod locale;

pub use analytics::WebAnalyticsService;
pub use config::{load_window_config, FOOTER_CONFIG_GLOBAL};
pub use locale::{
    browser_locale, cookie_value, locale_from_posix, persist_locale_preference,
    LANGUAGE_PREFERENCE_COOKIE,
};

#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error_to_string(err: wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsValue;

    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}
