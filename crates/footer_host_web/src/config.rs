//! Configuration loading from the hosting page.

use footer_host::{ConfigError, FooterConfig};

/// Global object the hosting page defines with the footer's upper-case config keys.
pub const FOOTER_CONFIG_GLOBAL: &str = "__FOOTER_CONFIG__";

/// Loads and validates the footer config from `window[global]`.
///
/// Native builds read the same keys from the process environment instead.
///
/// # Errors
///
/// Returns [`ConfigError::MissingKey`] when a required key is absent and
/// [`ConfigError::Parse`] when the global cannot be serialized.
pub fn load_window_config(global: &str) -> Result<FooterConfig, ConfigError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;

        use crate::js_error_to_string;

        let window = web_sys::window()
            .ok_or_else(|| ConfigError::Parse("window unavailable".to_string()))?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(global))
            .map_err(|err| ConfigError::Parse(js_error_to_string(err)))?;
        if value.is_undefined() || value.is_null() {
            return FooterConfig::from_values(&Default::default());
        }
        let raw = js_sys::JSON::stringify(&value)
            .map_err(|err| ConfigError::Parse(js_error_to_string(err)))?;
        FooterConfig::from_json(&String::from(raw))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = global;
        let values = std::env::vars().collect();
        FooterConfig::from_values(&values)
    }
}
