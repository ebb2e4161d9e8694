//! Active-locale detection and persistence of the user's language preference.

use footer_host::DEFAULT_LOCALE;

/// Cookie holding the user's explicit language choice.
pub const LANGUAGE_PREFERENCE_COOKIE: &str = "openedx-language-preference";

const PREFERENCE_MAX_AGE_SECS: u32 = 60 * 60 * 24 * 365;

/// Returns the value of cookie `name` from a `document.cookie` style header.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Converts a POSIX locale such as `fr_CH.UTF-8` into a tag like `fr-CH`.
pub fn locale_from_posix(raw: &str) -> Option<String> {
    let tag = raw.split(['.', '@']).next().unwrap_or_default().trim();
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return None;
    }
    Some(tag.replace('_', "-"))
}

/// Detects the active locale.
///
/// Browsers prefer the preference cookie, then `navigator.language`. Native builds read `LANG`.
/// Both fall back to [`DEFAULT_LOCALE`].
pub fn browser_locale() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return DEFAULT_LOCALE.to_string();
        };
        let preferred = window
            .document()
            .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|document| document.cookie().ok())
            .and_then(|header| cookie_value(&header, LANGUAGE_PREFERENCE_COOKIE));
        preferred
            .or_else(|| window.navigator().language())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var("LANG")
            .ok()
            .and_then(|raw| locale_from_posix(&raw))
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }
}

/// Stores `locale` in the preference cookie so the next page load picks it up.
///
/// # Errors
///
/// Returns an error when the document is unavailable or rejects the cookie write.
pub fn persist_locale_preference(locale: &str) -> Result<(), String> {
    let cookie = format!(
        "{LANGUAGE_PREFERENCE_COOKIE}={locale}; path=/; max-age={PREFERENCE_MAX_AGE_SECS}; samesite=lax"
    );

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        use crate::js_error_to_string;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
            .ok_or_else(|| "document unavailable".to_string())?;
        document.set_cookie(&cookie).map_err(js_error_to_string)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = cookie;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cookie_value_finds_named_pair() {
        let header = "csrftoken=abc; openedx-language-preference=fr-ca; theme=dark";
        assert_eq!(
            cookie_value(header, LANGUAGE_PREFERENCE_COOKIE),
            Some("fr-ca".to_string())
        );
        assert_eq!(cookie_value(header, "missing"), None);
    }

    #[test]
    fn cookie_value_ignores_empty_and_malformed_pairs() {
        assert_eq!(
            cookie_value("openedx-language-preference=; x", LANGUAGE_PREFERENCE_COOKIE),
            None
        );
        assert_eq!(cookie_value("", LANGUAGE_PREFERENCE_COOKIE), None);
    }

    #[test]
    fn posix_locales_become_language_tags() {
        assert_eq!(locale_from_posix("fr_CH.UTF-8"), Some("fr-CH".to_string()));
        assert_eq!(locale_from_posix("de_DE@euro"), Some("de-DE".to_string()));
        assert_eq!(locale_from_posix("es"), Some("es".to_string()));
        assert_eq!(locale_from_posix("C.UTF-8"), None);
        assert_eq!(locale_from_posix(""), None);
    }

    #[test]
    fn native_preference_write_is_accepted() {
        persist_locale_preference("fr").expect("persist");
    }
}
