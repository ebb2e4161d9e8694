use std::rc::Rc;

use footer_host::{outbound_link_event, AnalyticsService, TrackEvent};
use leptos::ev::MouseEvent;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::{
    classes::{bool_token, merge_layout_class},
    FooterEnvironment, FooterViewModel, LanguageOption, LanguageSelector,
};

/// Reads the `href` of the anchor that received `ev`, walking up from nested content such as
/// the logo image.
fn clicked_anchor_href(ev: &MouseEvent) -> Option<String> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let anchor = element.closest("a").ok().flatten()?;
    anchor.get_attribute("href")
}

fn dispatch_track_event(analytics: Rc<dyn AnalyticsService>, event: TrackEvent) {
    spawn_local(async move {
        if let Err(err) = analytics.send_track_event(&event).await {
            logging::warn!("footer analytics event {} dropped: {err}", event.name);
        }
    });
}

/// Reports one outbound-link event for a click on `href`.
fn track_outbound_click(analytics: Rc<dyn AnalyticsService>, href: &str) {
    dispatch_track_event(analytics, outbound_link_event(href));
}

#[component]
/// Page footer: optional language form, copyright and legal links, and the trademark logo.
///
/// The language form renders only when `supported_languages` is non-empty and
/// `on_language_selected` is supplied. Clicks on the legal and logo links report an
/// outbound-link tracking event.
pub fn SiteFooter(
    /// Configuration, locale, and analytics collaborators.
    env: FooterEnvironment,
    /// Logo image overriding the configured trademark logo.
    #[prop(optional, into)]
    logo: Option<String>,
    /// Receives the locale chosen in the language form.
    #[prop(optional)]
    on_language_selected: Option<Callback<String>>,
    /// Languages offered by the language form.
    #[prop(optional)]
    supported_languages: Vec<LanguageOption>,
    /// Extra classes appended to the footer element.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let model = FooterViewModel::build(
        &env,
        logo.as_deref(),
        &supported_languages,
        on_language_selected.is_some(),
    );

    let analytics = Rc::clone(&env.analytics);
    let track_outbound = Callback::new(move |ev: MouseEvent| match clicked_anchor_href(&ev) {
        Some(href) => track_outbound_click(Rc::clone(&analytics), &href),
        None => logging::warn!("footer link click without an href"),
    });

    let language_form = on_language_selected
        .filter(|_| model.show_language_selector)
        .map(|on_submit| {
            view! {
                <LanguageSelector
                    options=supported_languages
                    on_submit=on_submit
                    intl=env.intl.clone()
                />
            }
        });

    view! {
        <footer
            role="contentinfo"
            class=merge_layout_class("footer d-flex border-top py-3 px-4", layout_class)
            data-ui-kind="site-footer"
            data-ui-language-form=bool_token(model.show_language_selector)
        >
            <div class="container-fluid d-flex">
                <ul class="list-unstyled">
                    <li>{language_form}</li>
                    <li style="font-size: 0.6875em" class="pt-1">
                        {model.copyright}
                    </li>
                    <li style="font-size: 0.6875em" class="pt-1">
                        <a
                            class="text-primary-500 mr-1"
                            href=model.legal.tos
                            on:click=move |ev| track_outbound.call(ev)
                        >
                            {model.tos_label}
                        </a>
                        <a
                            class="text-primary-500 ml-1"
                            href=model.legal.privacy
                            on:click=move |ev| track_outbound.call(ev)
                        >
                            {model.privacy_label}
                        </a>
                    </li>
                </ul>
                <div class="flex-grow-1"></div>
                <a
                    class="d-block"
                    href=model.logo_href
                    aria-label=model.logo_aria_label
                    on:click=move |ev| track_outbound.call(ev)
                >
                    <img style="max-height: 45px" src=model.logo_src alt=model.logo_alt />
                </a>
            </div>
        </footer>
    }
}
