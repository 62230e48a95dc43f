//! Search widget configuration and locale strings.
//!
//! Every translation field carries an English default, so a locale is
//! complete by construction and a partial override only replaces the strings
//! it names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Search widget configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchConfig {
    /// Which search backend the widget uses.
    #[serde(default)]
    pub provider: SearchProvider,

    /// Provider options, currently locale overrides for the widget strings.
    #[serde(default)]
    pub options: SearchOptions,
}

/// Search backend. Only the local full-text index is supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    #[default]
    Local,
}

/// Options for the search provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchOptions {
    /// Widget strings per locale. The site's primary language uses the
    /// `root` key.
    #[serde(default)]
    pub locales: BTreeMap<String, SearchLocale>,
}

/// Widget string overrides for one locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchLocale {
    #[serde(default)]
    pub translations: SearchTranslations,
}

/// The full set of search widget strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchTranslations {
    #[serde(default)]
    pub button: ButtonTranslations,

    #[serde(default)]
    pub modal: ModalTranslations,
}

/// Strings on the search button itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ButtonTranslations {
    #[serde(default = "default_button_text")]
    pub button_text: String,

    #[serde(default = "default_button_aria_label")]
    pub button_aria_label: String,
}

/// Strings inside the search modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModalTranslations {
    #[serde(default = "default_display_details")]
    pub display_details: String,

    #[serde(default = "default_reset_button_title")]
    pub reset_button_title: String,

    #[serde(default = "default_back_button_title")]
    pub back_button_title: String,

    #[serde(default = "default_no_results_text")]
    pub no_results_text: String,

    #[serde(default)]
    pub footer: FooterTranslations,
}

/// Keyboard hints in the modal footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FooterTranslations {
    #[serde(default = "default_select_text")]
    pub select_text: String,

    #[serde(default = "default_navigate_text")]
    pub navigate_text: String,

    #[serde(default = "default_close_text")]
    pub close_text: String,
}

fn default_button_text() -> String {
    "Search".to_string()
}

fn default_button_aria_label() -> String {
    "Search".to_string()
}

fn default_display_details() -> String {
    "Display detailed list".to_string()
}

fn default_reset_button_title() -> String {
    "Reset search".to_string()
}

fn default_back_button_title() -> String {
    "Close search".to_string()
}

fn default_no_results_text() -> String {
    "No results for".to_string()
}

fn default_select_text() -> String {
    "to select".to_string()
}

fn default_navigate_text() -> String {
    "to navigate".to_string()
}

fn default_close_text() -> String {
    "to close".to_string()
}

impl Default for ButtonTranslations {
    fn default() -> Self {
        ButtonTranslations {
            button_text: default_button_text(),
            button_aria_label: default_button_aria_label(),
        }
    }
}

impl Default for ModalTranslations {
    fn default() -> Self {
        ModalTranslations {
            display_details: default_display_details(),
            reset_button_title: default_reset_button_title(),
            back_button_title: default_back_button_title(),
            no_results_text: default_no_results_text(),
            footer: FooterTranslations::default(),
        }
    }
}

impl Default for FooterTranslations {
    fn default() -> Self {
        FooterTranslations {
            select_text: default_select_text(),
            navigate_text: default_navigate_text(),
            close_text: default_close_text(),
        }
    }
}

impl SearchTranslations {
    /// All widget strings as `(dotted key, value)` pairs, in widget order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("button.buttonText", self.button.button_text.as_str()),
            (
                "button.buttonAriaLabel",
                self.button.button_aria_label.as_str(),
            ),
            ("modal.displayDetails", self.modal.display_details.as_str()),
            (
                "modal.resetButtonTitle",
                self.modal.reset_button_title.as_str(),
            ),
            (
                "modal.backButtonTitle",
                self.modal.back_button_title.as_str(),
            ),
            ("modal.noResultsText", self.modal.no_results_text.as_str()),
            (
                "modal.footer.selectText",
                self.modal.footer.select_text.as_str(),
            ),
            (
                "modal.footer.navigateText",
                self.modal.footer.navigate_text.as_str(),
            ),
            (
                "modal.footer.closeText",
                self.modal.footer.close_text.as_str(),
            ),
        ]
    }
}
