//! Legal-link derivation for the footer.

use crate::FooterConfig;

/// Catalog site used for legal links when no catalog base URL is configured.
pub const FALLBACK_CATALOG_BASE_URL: &str = "https://swissmooc.ch/";

const TOS_PATH: &str = "general-terms-and-conditions/";
const PRIVACY_PATH: &str = "privacy-policy/";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved terms-of-service and privacy-policy targets.
pub struct LegalUrls {
    /// Terms-of-service URL.
    pub tos: String,
    /// Privacy-policy URL.
    pub privacy: String,
}

/// Resolves both legal links from the configured catalog base URL.
///
/// The base is concatenated as-is, so it is expected to end with `/`.
pub fn legal_urls(config: &FooterConfig) -> LegalUrls {
    let base = config
        .catalog_base_url()
        .unwrap_or(FALLBACK_CATALOG_BASE_URL);
    LegalUrls {
        tos: format!("{base}{TOS_PATH}"),
        privacy: format!("{base}{PRIVACY_PATH}"),
    }
}
