//! Leptos site-footer chrome and its language-selection form.
//!
//! Components receive every collaborator explicitly through [`FooterEnvironment`]: validated
//! configuration, the active [`footer_host::Intl`] bundle, and the analytics collector. Markup
//! decisions that do not need a DOM live in [`FooterViewModel`] so they can be tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod classes;
mod environment;
mod language_selector;
mod site_footer;
mod view_model;

pub use environment::FooterEnvironment;
pub use language_selector::{
    default_option_index, LanguageOption, LanguageSelector, LANGUAGE_SELECT_NAME,
};
pub use site_footer::SiteFooter;
pub use view_model::FooterViewModel;
