use footer_host::{Intl, MessageKey};
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::classes::merge_layout_class;

/// `name` and `id` of the language select field.
pub const LANGUAGE_SELECT_NAME: &str = "site-footer-language-select";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable language. Values are expected to be unique within a list.
pub struct LanguageOption {
    /// Locale code submitted when the option is chosen.
    pub value: String,
    /// Human-readable display name.
    pub label: String,
}

impl LanguageOption {
    /// Creates an option from a locale code and its display name.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Returns the index of the option pre-selected for `locale`, if any value matches exactly.
pub fn default_option_index(options: &[LanguageOption], locale: &str) -> Option<usize> {
    options.iter().position(|option| option.value == locale)
}

fn submit_selection(on_submit: Callback<String>, selected: Option<String>) {
    match selected {
        Some(language_code) => on_submit.call(language_code),
        None => logging::warn!("language form submitted before its select mounted"),
    }
}

#[component]
/// Uncontrolled language form: a select pre-set to the active locale and an apply button.
pub fn LanguageSelector(
    /// Selectable languages in display order.
    options: Vec<LanguageOption>,
    /// Receives the selected locale code once per submit.
    on_submit: Callback<String>,
    /// Active locale and catalog for the default selection and button label.
    intl: Intl,
    /// Extra classes appended to the form element.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let select_ref = create_node_ref::<html::Select>();
    let default_index = default_option_index(&options, intl.locale());
    let submit_label = intl.format_message(MessageKey::LanguageFormSubmitLabel);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_selection(on_submit, select_ref.get().map(|select| select.value()));
    };

    view! {
        <form
            class=merge_layout_class("form-inline", layout_class)
            data-ui-kind="language-form"
            on:submit=handle_submit
        >
            <div class="form-group">
                <select
                    id=LANGUAGE_SELECT_NAME
                    class="form-control-sm mx-2"
                    name=LANGUAGE_SELECT_NAME
                    node_ref=select_ref
                >
                    {options
                        .into_iter()
                        .enumerate()
                        .map(|(index, option)| {
                            view! {
                                <option value=option.value selected={default_index == Some(index)}>
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button
                    data-testid="site-footer-submit-btn"
                    class="btn btn-outline-primary btn-sm"
                    type="submit"
                >
                    {submit_label}
                </button>
            </div>
        </form>
    }
}
