//! Typed host contracts consumed by the site footer.
//!
//! This crate owns the footer's injected collaborators: validated configuration, the analytics
//! collector service, the message catalog and locale helpers, and legal-link derivation. It is
//! target independent; browser adapters live in `footer_host_web` and the Leptos components in
//! `footer_ui`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod analytics;
pub mod config;
pub mod i18n;
pub mod links;

pub use analytics::{
    outbound_link_event, AnalyticsFuture, AnalyticsService, MemoryAnalyticsService,
    NoopAnalyticsService, OutboundLinkProperties, TrackEvent, FOOTER_LINK_EVENT,
    OUTBOUND_LINK_CATEGORY,
};
pub use config::{ensure_config, ConfigError, FooterConfig, REQUIRED_FOOTER_KEYS};
pub use i18n::{
    is_rtl, locale_prefix, resolve_supported_locale, CatalogError, Intl, MessageCatalog,
    MessageKey, DEFAULT_LOCALE,
};
pub use links::{legal_urls, LegalUrls, FALLBACK_CATALOG_BASE_URL};
