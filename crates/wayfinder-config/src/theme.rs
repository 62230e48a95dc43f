//! Theme-level configuration: nav, sidebar, search, and page chrome.

use serde::{Deserialize, Serialize};

use crate::nav::{ConfigLink, NavItem};
use crate::search::SearchConfig;
use crate::sidebar::Sidebar;

/// Placeholder in an edit link pattern replaced by the page's source path.
pub const EDIT_PATH_PLACEHOLDER: &str = ":path";

/// Theme configuration. Every field is optional; an empty table yields a
/// site with no nav, no sidebar, and default chrome strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeConfig {
    /// Top navigation bar entries, in display order.
    #[serde(default)]
    pub nav: Vec<NavItem>,

    /// Sidebar trees keyed by route prefix.
    #[serde(default)]
    pub sidebar: Sidebar,

    /// Search widget configuration.
    #[serde(default)]
    pub search: SearchConfig,

    /// "Edit this page" link settings. Absent means the link is not shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,

    /// Site footer. Absent means no footer is rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,

    /// "Last updated" timestamp label.
    #[serde(default)]
    pub last_updated: LastUpdated,

    /// In-page outline label.
    #[serde(default)]
    pub outline: Outline,

    /// Previous/next page link labels.
    #[serde(default)]
    pub doc_footer: DocFooter,
}

/// "Edit this page" link settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EditLink {
    /// URL pattern containing `:path`, replaced by the page's source path
    /// relative to the content root.
    pub pattern: String,

    /// Link text.
    #[serde(default = "default_edit_link_text")]
    pub text: String,
}

/// Site footer strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Footer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// "Last updated" timestamp label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LastUpdated {
    #[serde(default = "default_last_updated_text")]
    pub text: String,
}

/// In-page outline label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Outline {
    #[serde(default = "default_outline_label")]
    pub label: String,
}

/// Previous/next page link labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocFooter {
    #[serde(default = "default_doc_footer_prev")]
    pub prev: String,

    #[serde(default = "default_doc_footer_next")]
    pub next: String,
}

fn default_edit_link_text() -> String {
    "Edit this page".to_string()
}

fn default_last_updated_text() -> String {
    "Last updated".to_string()
}

fn default_outline_label() -> String {
    "On this page".to_string()
}

fn default_doc_footer_prev() -> String {
    "Previous page".to_string()
}

fn default_doc_footer_next() -> String {
    "Next page".to_string()
}

impl Default for LastUpdated {
    fn default() -> Self {
        LastUpdated {
            text: default_last_updated_text(),
        }
    }
}

impl Default for Outline {
    fn default() -> Self {
        Outline {
            label: default_outline_label(),
        }
    }
}

impl Default for DocFooter {
    fn default() -> Self {
        DocFooter {
            prev: default_doc_footer_prev(),
            next: default_doc_footer_next(),
        }
    }
}

impl EditLink {
    /// Edit URL for a page whose source lives at `rel_path` under the
    /// content root.
    pub fn resolve(&self, rel_path: &str) -> String {
        self.pattern.replace(EDIT_PATH_PLACEHOLDER, rel_path)
    }
}

impl ThemeConfig {
    /// Every link destination in the nav bar and all sidebar trees, labelled
    /// with its location path.
    pub fn links(&self) -> Vec<ConfigLink> {
        let mut out = Vec::new();
        for (i, item) in self.nav.iter().enumerate() {
            item.collect_links(&format!("themeConfig.nav[{}]", i), &mut out);
        }
        out.extend(self.sidebar.links());
        out
    }
}
