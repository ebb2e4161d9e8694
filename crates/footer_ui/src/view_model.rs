use footer_host::{legal_urls, LegalUrls, MessageKey};

use crate::{FooterEnvironment, LanguageOption};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Render-time values for one footer render, derived from props and the environment.
pub struct FooterViewModel {
    /// Whether the language form is rendered in the first list item.
    pub show_language_selector: bool,
    /// Copyright notice text.
    pub copyright: String,
    /// Terms and privacy targets shared by both legal anchors.
    pub legal: LegalUrls,
    /// Terms link label.
    pub tos_label: String,
    /// Privacy link label.
    pub privacy_label: String,
    /// Logo image source.
    pub logo_src: String,
    /// Logo link target.
    pub logo_href: String,
    /// Accessible label of the logo link.
    pub logo_aria_label: String,
    /// Alt text of the logo image.
    pub logo_alt: String,
}

impl FooterViewModel {
    /// Derives the render values; `has_language_callback` reports whether a selection callback
    /// was supplied.
    pub fn build(
        env: &FooterEnvironment,
        logo: Option<&str>,
        supported_languages: &[LanguageOption],
        has_language_callback: bool,
    ) -> Self {
        let config = &env.config;
        let intl = &env.intl;
        Self {
            show_language_selector: !supported_languages.is_empty() && has_language_callback,
            copyright: format!(
                "© {}. All rights reserved except where noted. edX, Open edX and their respective logos are registered trademarks of edX Inc.",
                config.site_name
            ),
            legal: legal_urls(config),
            tos_label: intl.format_message(MessageKey::CatalogLinksTos),
            privacy_label: intl.format_message(MessageKey::CatalogLinksPrivacy),
            logo_src: logo.unwrap_or(&config.logo_trademark_url).to_string(),
            logo_href: config.lms_base_url.clone(),
            logo_aria_label: intl.format_message(MessageKey::LogoAriaLabel),
            logo_alt: intl.format_message(MessageKey::LogoAltText),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use footer_host::{FooterConfig, Intl, MessageCatalog, NoopAnalyticsService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn env(catalog_base_url: Option<&str>) -> FooterEnvironment {
        FooterEnvironment::new(
            FooterConfig {
                lms_base_url: "https://lms.example.com".to_string(),
                logo_trademark_url: "https://cdn.example.com/trademark.png".to_string(),
                catalog_base_url: catalog_base_url.map(str::to_string),
                site_name: "Example Academy".to_string(),
            },
            Intl::default(),
            Rc::new(NoopAnalyticsService),
        )
    }

    fn languages() -> Vec<LanguageOption> {
        vec![
            LanguageOption::new("en", "English"),
            LanguageOption::new("fr", "Français"),
        ]
    }

    #[test]
    fn language_form_requires_options_and_callback() {
        let env = env(None);
        assert!(FooterViewModel::build(&env, None, &languages(), true).show_language_selector);
        assert!(!FooterViewModel::build(&env, None, &[], true).show_language_selector);
        assert!(!FooterViewModel::build(&env, None, &languages(), false).show_language_selector);
    }

    #[test]
    fn legal_links_follow_catalog_base_url() {
        let model = FooterViewModel::build(&env(Some("https://example.com/")), None, &[], false);
        assert_eq!(
            model.legal,
            LegalUrls {
                tos: "https://example.com/general-terms-and-conditions/".to_string(),
                privacy: "https://example.com/privacy-policy/".to_string(),
            }
        );

        let fallback = FooterViewModel::build(&env(None), None, &[], false);
        assert_eq!(
            fallback.legal.tos,
            "https://swissmooc.ch/general-terms-and-conditions/"
        );
        assert_eq!(fallback.legal.privacy, "https://swissmooc.ch/privacy-policy/");
    }

    #[test]
    fn logo_prop_overrides_configured_trademark() {
        let env = env(None);
        let custom = FooterViewModel::build(&env, Some("https://cdn/x.png"), &[], false);
        assert_eq!(custom.logo_src, "https://cdn/x.png");
        assert_eq!(custom.logo_href, "https://lms.example.com");

        let default = FooterViewModel::build(&env, None, &[], false);
        assert_eq!(default.logo_src, "https://cdn.example.com/trademark.png");
    }

    #[test]
    fn text_comes_from_config_and_catalog() {
        let mut catalog = MessageCatalog::default();
        catalog.insert("fr", MessageKey::CatalogLinksTos.id(), "Conditions générales");
        catalog.insert("fr", MessageKey::LogoAltText.id(), "Propulsé par Open edX");
        let env = FooterEnvironment {
            intl: Intl::new("fr-CH", Rc::new(catalog)),
            ..env(None)
        };

        let model = FooterViewModel::build(&env, None, &[], false);
        assert!(model.copyright.starts_with("© Example Academy. All rights reserved"));
        assert_eq!(model.tos_label, "Conditions générales");
        assert_eq!(model.privacy_label, "Privacy Policy");
        assert_eq!(model.logo_alt, "Propulsé par Open edX");
        assert_eq!(model.logo_aria_label, "edX Home");
    }
}
