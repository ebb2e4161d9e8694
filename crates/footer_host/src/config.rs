//! Footer configuration model and required-key validation.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Keys the footer cannot render without.
pub const REQUIRED_FOOTER_KEYS: [&str; 2] = ["LMS_BASE_URL", "LOGO_TRADEMARK_URL"];

const FOOTER_REQUESTER: &str = "Footer component";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Configuration errors raised while building a [`FooterConfig`].
pub enum ConfigError {
    /// A required key is absent or empty.
    #[error("App configuration error: {key} is required by {requester}.")]
    MissingKey {
        /// Upper-case configuration key.
        key: String,
        /// Component that declared the key as required.
        requester: String,
    },
    /// The raw configuration payload could not be decoded.
    #[error("App configuration error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, String>")]
/// Read-only site configuration injected into the footer.
///
/// Deserializes from a map of upper-case keys and is validated like [`FooterConfig::from_values`].
pub struct FooterConfig {
    /// Base URL of the learning platform; the logo links here.
    pub lms_base_url: String,
    /// Default trademark logo image URL.
    pub logo_trademark_url: String,
    /// Marketing/catalog site base URL used for legal links, when configured.
    pub catalog_base_url: Option<String>,
    /// Display name interpolated into the copyright notice.
    pub site_name: String,
}

impl TryFrom<HashMap<String, String>> for FooterConfig {
    type Error = ConfigError;

    fn try_from(values: HashMap<String, String>) -> Result<Self, Self::Error> {
        Self::from_values(&values)
    }
}

/// Verifies that every key in `keys` is present and non-empty in `values`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingKey`] for the first missing key, naming `requester`.
pub fn ensure_config(
    values: &HashMap<String, String>,
    keys: &[&str],
    requester: &str,
) -> Result<(), ConfigError> {
    for key in keys {
        let present = values
            .get(*key)
            .is_some_and(|value| !value.trim().is_empty());
        if !present {
            return Err(ConfigError::MissingKey {
                key: (*key).to_string(),
                requester: requester.to_string(),
            });
        }
    }
    Ok(())
}

impl FooterConfig {
    /// Builds a validated config from upper-case key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when a key in [`REQUIRED_FOOTER_KEYS`] is absent.
    pub fn from_values(values: &HashMap<String, String>) -> Result<Self, ConfigError> {
        ensure_config(values, &REQUIRED_FOOTER_KEYS, FOOTER_REQUESTER)?;
        let value = |key: &str| values.get(key).cloned().unwrap_or_default();
        Ok(Self {
            lms_base_url: value("LMS_BASE_URL"),
            logo_trademark_url: value("LOGO_TRADEMARK_URL"),
            catalog_base_url: values
                .get("CATALOG_BASE_URL")
                .filter(|base| !base.is_empty())
                .cloned(),
            site_name: value("SITE_NAME"),
        })
    }

    /// Decodes and validates a config from a JSON object of string values.
    ///
    /// Non-string values are ignored, which makes them count as missing for required keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::MissingKey`] for
    /// absent required keys.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        let values = object
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::String(text) => Some((key, text)),
                _ => None,
            })
            .collect::<HashMap<_, _>>();
        Self::from_values(&values)
    }

    /// Returns the catalog base URL when one is configured and non-empty.
    pub fn catalog_base_url(&self) -> Option<&str> {
        self.catalog_base_url
            .as_deref()
            .filter(|base| !base.is_empty())
    }
}
