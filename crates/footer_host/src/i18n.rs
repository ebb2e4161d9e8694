//! Message catalog, active-locale bundle, and locale string helpers.

use std::{collections::HashMap, rc::Rc};

use serde::Deserialize;
use thiserror::Error;

/// Locale used when nothing better can be resolved.
pub const DEFAULT_LOCALE: &str = "en";

const RTL_LANGUAGES: [&str; 4] = ["ar", "he", "fa", "ur"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Enumerated message identifiers rendered by the footer.
pub enum MessageKey {
    /// Terms-of-service link label.
    CatalogLinksTos,
    /// Privacy-policy link label.
    CatalogLinksPrivacy,
    /// Accessible label of the logo link.
    LogoAriaLabel,
    /// Alt text of the logo image.
    LogoAltText,
    /// Submit button label of the language form.
    LanguageFormSubmitLabel,
}

impl MessageKey {
    /// Every key, in a stable order.
    pub const ALL: [Self; 5] = [
        Self::CatalogLinksTos,
        Self::CatalogLinksPrivacy,
        Self::LogoAriaLabel,
        Self::LogoAltText,
        Self::LanguageFormSubmitLabel,
    ];

    /// Returns the stable message id used in catalogs.
    pub const fn id(self) -> &'static str {
        match self {
            Self::CatalogLinksTos => "footer.catalogLinks.tos",
            Self::CatalogLinksPrivacy => "footer.catalogLinks.privacy",
            Self::LogoAriaLabel => "footer.logo.ariaLabel",
            Self::LogoAltText => "footer.logo.altText",
            Self::LanguageFormSubmitLabel => "footer.languageForm.submit.label",
        }
    }

    /// Returns the English text used when no catalog entry matches.
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::CatalogLinksTos => "Terms of Service",
            Self::CatalogLinksPrivacy => "Privacy Policy",
            Self::LogoAriaLabel => "edX Home",
            Self::LogoAltText => "Powered by Open edX",
            Self::LanguageFormSubmitLabel => "Apply",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Message catalog loading errors.
pub enum CatalogError {
    /// Catalog JSON could not be decoded.
    #[error("message catalog parse failed: {0}")]
    Parse(String),
}

type RawCatalog = HashMap<String, HashMap<String, String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawCatalog")]
/// Locale-specific translations keyed by locale, then message id.
///
/// Locale keys are normalized on every load path, so `fr-CA`, `fr_CA` and `fr-ca` are one entry.
pub struct MessageCatalog {
    locales: RawCatalog,
}

impl From<RawCatalog> for MessageCatalog {
    fn from(raw: RawCatalog) -> Self {
        let mut catalog = Self::default();
        for (locale, messages) in raw {
            for (id, text) in messages {
                catalog.insert(&locale, &id, text);
            }
        }
        catalog
    }
}

impl MessageCatalog {
    /// Decodes a catalog of the form `{ "<locale>": { "<message id>": "<text>" } }`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when the payload is not a two-level string map.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))
    }

    /// Adds or replaces one translation.
    pub fn insert(&mut self, locale: &str, id: &str, text: impl Into<String>) {
        self.locales
            .entry(normalize_locale(locale))
            .or_default()
            .insert(id.to_string(), text.into());
    }

    /// Resolves `key` for `locale`, falling back to the bare language and then to English.
    pub fn format_message(&self, locale: &str, key: MessageKey) -> String {
        let locale = normalize_locale(locale);
        let language = language_of(&locale);
        let message = [locale.as_str(), language]
            .into_iter()
            .find_map(|candidate| {
                self.locales
                    .get(candidate)
                    .and_then(|messages| messages.get(key.id()))
            })
            .cloned()
            .unwrap_or_else(|| key.default_message().to_string());
        message
    }
}

#[derive(Debug, Clone)]
/// Active locale paired with the catalog used to render text in it.
pub struct Intl {
    locale: String,
    catalog: Rc<MessageCatalog>,
}

impl Intl {
    /// Creates a locale bundle over a shared catalog.
    pub fn new(locale: impl Into<String>, catalog: Rc<MessageCatalog>) -> Self {
        Self {
            locale: locale.into(),
            catalog,
        }
    }

    /// Returns the active locale string as supplied.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Formats a message in the active locale.
    pub fn format_message(&self, key: MessageKey) -> String {
        self.catalog.format_message(&self.locale, key)
    }

    /// Returns a bundle for another locale sharing the same catalog.
    pub fn with_locale(&self, locale: impl Into<String>) -> Self {
        Self::new(locale, Rc::clone(&self.catalog))
    }
}

impl Default for Intl {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE, Rc::new(MessageCatalog::default()))
    }
}

/// Returns the URL path prefix for `locale`: empty for English, `/xx` otherwise.
///
/// Only the first two characters are considered, lower-cased; shorter input is used as-is.
pub fn locale_prefix(locale: &str) -> String {
    let two_letter: String = locale.chars().take(2).collect::<String>().to_lowercase();
    if two_letter == "en" {
        String::new()
    } else {
        format!("/{two_letter}")
    }
}

/// Picks the best entry of `supported` for a requested locale.
///
/// An exact case-insensitive match wins, then a match on the language part alone, then
/// [`DEFAULT_LOCALE`].
pub fn resolve_supported_locale(candidate: &str, supported: &[&str]) -> String {
    let candidate = normalize_locale(candidate);
    if let Some(exact) = supported
        .iter()
        .find(|locale| normalize_locale(locale) == candidate)
    {
        return (*exact).to_string();
    }
    let language = language_of(&candidate);
    supported
        .iter()
        .find(|locale| normalize_locale(locale) == language)
        .map(|locale| (*locale).to_string())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Returns whether `locale` is written right-to-left.
pub fn is_rtl(locale: &str) -> bool {
    let locale = normalize_locale(locale);
    RTL_LANGUAGES.contains(&language_of(&locale))
}

fn normalize_locale(locale: &str) -> String {
    locale.trim().replace('_', "-").to_lowercase()
}

fn language_of(normalized: &str) -> &str {
    normalized.split('-').next().unwrap_or(normalized)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn english_locales_have_no_prefix() {
        assert_eq!(locale_prefix("en"), "");
        assert_eq!(locale_prefix("en-US"), "");
        assert_eq!(locale_prefix("EN-gb"), "");
    }

    #[test]
    fn other_locales_prefix_with_lowercased_two_letters() {
        assert_eq!(locale_prefix("fr-CA"), "/fr");
        assert_eq!(locale_prefix("DE"), "/de");
        assert_eq!(locale_prefix("zh-Hans"), "/zh");
        assert_eq!(locale_prefix("eng"), "");
    }

    #[test]
    fn short_locales_use_available_characters() {
        assert_eq!(locale_prefix("e"), "/e");
        assert_eq!(locale_prefix(""), "/");
    }

    #[test]
    fn catalog_falls_back_from_region_to_language_to_default() {
        let catalog = MessageCatalog::from_json(
            r#"{
                "fr": { "footer.catalogLinks.tos": "Conditions d'utilisation" },
                "fr-CA": { "footer.catalogLinks.privacy": "Confidentialité" }
            }"#,
        )
        .expect("catalog");

        assert_eq!(
            catalog.format_message("fr-ca", MessageKey::CatalogLinksPrivacy),
            "Confidentialité"
        );
        assert_eq!(
            catalog.format_message("fr_CA", MessageKey::CatalogLinksTos),
            "Conditions d'utilisation"
        );
        assert_eq!(
            catalog.format_message("fr-CA", MessageKey::LanguageFormSubmitLabel),
            "Apply"
        );
        assert_eq!(
            catalog.format_message("de", MessageKey::CatalogLinksTos),
            "Terms of Service"
        );
    }

    #[test]
    fn catalog_rejects_non_string_messages() {
        let err = MessageCatalog::from_json(r#"{"fr": {"footer.logo.altText": 3}}"#)
            .expect_err("parse");
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn intl_formats_in_active_locale() {
        let mut catalog = MessageCatalog::default();
        catalog.insert("es", MessageKey::LanguageFormSubmitLabel.id(), "Aplicar");
        let intl = Intl::new("es-419", Rc::new(catalog));

        assert_eq!(intl.locale(), "es-419");
        assert_eq!(intl.format_message(MessageKey::LanguageFormSubmitLabel), "Aplicar");
        assert_eq!(
            intl.with_locale("en").format_message(MessageKey::LanguageFormSubmitLabel),
            "Apply"
        );
    }

    #[test]
    fn serde_loaded_catalog_normalizes_region_keys() {
        let catalog: MessageCatalog = serde_json::from_str(
            r#"{"fr-CA": {"footer.catalogLinks.privacy": "Confidentialité"}}"#,
        )
        .expect("catalog");

        assert_eq!(
            catalog.format_message("fr-CA", MessageKey::CatalogLinksPrivacy),
            "Confidentialité"
        );
        assert_eq!(
            catalog,
            MessageCatalog::from_json(
                r#"{"fr_ca": {"footer.catalogLinks.privacy": "Confidentialité"}}"#
            )
            .expect("catalog")
        );
    }

    #[test]
    fn intl_falls_back_from_region_to_language() {
        let catalog = MessageCatalog::from_json(
            r#"{"de": {"footer.logo.altText": "Unterstützt von Open edX"}}"#,
        )
        .expect("catalog");
        let intl = Intl::new("de-CH", Rc::new(catalog));

        assert_eq!(
            intl.format_message(MessageKey::LogoAltText),
            "Unterstützt von Open edX"
        );
        assert_eq!(intl.format_message(MessageKey::LogoAriaLabel), "edX Home");
    }

    #[test]
    fn supported_locale_resolution() {
        let supported = ["en", "fr", "pt-br", "zh-Hans"];
        assert_eq!(resolve_supported_locale("FR", &supported), "fr");
        assert_eq!(resolve_supported_locale("fr-CA", &supported), "fr");
        assert_eq!(resolve_supported_locale("pt_BR", &supported), "pt-br");
        assert_eq!(resolve_supported_locale("zh-hans", &supported), "zh-Hans");
        assert_eq!(resolve_supported_locale("ja", &supported), "en");
    }

    #[test]
    fn rtl_detection_uses_language_part() {
        assert!(is_rtl("ar"));
        assert!(is_rtl("he-IL"));
        assert!(is_rtl("FA"));
        assert!(!is_rtl("fr"));
        assert!(!is_rtl("en-US"));
    }
}
