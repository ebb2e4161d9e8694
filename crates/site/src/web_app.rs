use std::rc::Rc;

use footer_host::{
    is_rtl, resolve_supported_locale, AnalyticsService, Intl, MessageCatalog, DEFAULT_LOCALE,
};
use footer_host_web::{
    browser_locale, load_window_config, persist_locale_preference, WebAnalyticsService,
    FOOTER_CONFIG_GLOBAL,
};
use footer_ui::{FooterEnvironment, LanguageOption, SiteFooter};
use leptos::*;
use leptos_meta::*;

/// Locale codes and display names offered in the footer's language form.
pub const SUPPORTED_LANGUAGES: [(&str, &str); 4] = [
    ("en", "English"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("it", "Italiano"),
];

/// Loads the bundled footer translations.
pub fn footer_catalog() -> MessageCatalog {
    MessageCatalog::from_json(include_str!("../messages/footer.json")).unwrap_or_else(|err| {
        logging::error!("{err}");
        MessageCatalog::default()
    })
}

fn supported_language_options() -> Vec<LanguageOption> {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|(value, label)| LanguageOption::new(*value, *label))
        .collect()
}

fn initial_locale() -> String {
    let supported: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|(value, _)| *value).collect();
    resolve_supported_locale(&browser_locale(), &supported)
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let locale = create_rw_signal(initial_locale());
    let on_language_selected = Callback::new(move |code: String| {
        if let Err(err) = persist_locale_preference(&code) {
            logging::warn!("language preference not saved: {err}");
        }
        locale.set(code);
    });

    let footer = match load_window_config(FOOTER_CONFIG_GLOBAL) {
        Ok(config) => {
            let analytics: Rc<dyn AnalyticsService> = Rc::new(WebAnalyticsService);
            let env = FooterEnvironment::new(
                config,
                Intl::new(DEFAULT_LOCALE, Rc::new(footer_catalog())),
                analytics,
            );
            (move || {
                view! {
                    <SiteFooter
                        env=env.with_locale(locale.get())
                        on_language_selected=on_language_selected
                        supported_languages=supported_language_options()
                    />
                }
            })
            .into_view()
        }
        Err(err) => {
            logging::error!("{err}");
            view! { <p class="site-config-error" role="alert">{err.to_string()}</p> }.into_view()
        }
    };

    view! {
        <Html
            lang=move || locale.get()
            dir=move || if is_rtl(&locale.get()) { "rtl" } else { "ltr" }
        />
        <Title text="Site footer" />

        <main class="site-root"></main>
        {footer}
    }
}
