//! Structural validation of a loaded configuration.
//!
//! Parsing already guarantees shape (required fields, no unknown keys).
//! Validation checks the rules the generator assumes beyond shape: link
//! targets it can resolve, regexes that compile, prefixes with the right
//! delimiters. Every violation is reported with the dotted location of the
//! offending field.

use std::fmt;

use regex::Regex;

use crate::head::HeadTag;
use crate::link::{self, LinkKind};
use crate::nav::{NavItem, NavLink};
use crate::search::SearchConfig;
use crate::sidebar::Sidebar;
use crate::site::SiteConfig;
use crate::theme::{EditLink, EDIT_PATH_PLACEHOLDER};

/// How bad a finding is. Errors make the record unusable; warnings flag
/// degraded output the generator would still accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub location: String,
    pub message: String,
}

impl Issue {
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Issue {
        Issue {
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Issue {
        Issue {
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Whether any finding in `issues` is an error.
pub fn has_errors(issues: &[Issue]) -> bool {
    issues
        .iter()
        .any(|issue| issue.severity == Severity::Error)
}

/// Check `config` and collect every finding. An empty result means the
/// record is safe to hand to the generator.
pub fn validate(config: &SiteConfig) -> Vec<Issue> {
    let mut issues = Vec::new();

    if config.title.trim().is_empty() {
        issues.push(Issue::error("title", "must not be empty"));
    }
    if config.lang.trim().is_empty() {
        issues.push(Issue::error("lang", "must not be empty"));
    }
    if !config.base.starts_with('/') || !config.base.ends_with('/') {
        issues.push(Issue::error(
            "base",
            format!("{:?} must start and end with '/'", config.base),
        ));
    }

    for (i, tag) in config.head.iter().enumerate() {
        check_head_tag(tag, i, &mut issues);
    }

    for (i, item) in config.theme.nav.iter().enumerate() {
        check_nav_item(item, &format!("themeConfig.nav[{}]", i), 0, &mut issues);
    }

    check_sidebar(&config.theme.sidebar, &mut issues);
    check_search(&config.theme.search, &mut issues);

    if let Some(edit) = &config.theme.edit_link {
        check_edit_link(edit, &mut issues);
    }

    if config.theme.last_updated.text.trim().is_empty() {
        issues.push(Issue::error("themeConfig.lastUpdated.text", "must not be empty"));
    }
    if config.theme.outline.label.trim().is_empty() {
        issues.push(Issue::error("themeConfig.outline.label", "must not be empty"));
    }
    if config.theme.doc_footer.prev.trim().is_empty() {
        issues.push(Issue::error("themeConfig.docFooter.prev", "must not be empty"));
    }
    if config.theme.doc_footer.next.trim().is_empty() {
        issues.push(Issue::error("themeConfig.docFooter.next", "must not be empty"));
    }

    issues
}

fn check_head_tag(tag: &HeadTag, index: usize, issues: &mut Vec<Issue>) {
    let location = format!("head[{}]", index);

    if tag.tag().is_empty() || !tag.tag().chars().all(|c| c.is_ascii_alphanumeric()) {
        issues.push(Issue::error(
            &location,
            format!("{:?} is not a valid tag name", tag.tag()),
        ));
    }
    for key in tag.attrs().keys() {
        if key.trim().is_empty() {
            issues.push(Issue::error(&location, "attribute names must not be empty"));
        }
    }
}

fn check_nav_item(item: &NavItem, location: &str, depth: usize, issues: &mut Vec<Issue>) {
    match item {
        NavItem::Link(link) => check_nav_link(link, location, issues),
        NavItem::Group(group) => {
            if group.text.trim().is_empty() {
                issues.push(Issue::error(location, "group text must not be empty"));
            }
            if group.items.is_empty() {
                issues.push(Issue::error(location, "group has no items"));
            }
            if depth >= 1 {
                issues.push(Issue::error(location, "groups nest at most one level"));
            }
            for (i, child) in group.items.iter().enumerate() {
                check_nav_item(
                    child,
                    &format!("{}.items[{}]", location, i),
                    depth + 1,
                    issues,
                );
            }
        }
    }
}

fn check_nav_link(link: &NavLink, location: &str, issues: &mut Vec<Issue>) {
    if link.text.trim().is_empty() {
        issues.push(Issue::error(location, "link text must not be empty"));
    }
    if link.link.trim().is_empty() {
        issues.push(Issue::error(location, "link target must not be empty"));
    } else {
        match link::classify(&link.link) {
            LinkKind::Internal | LinkKind::External => {}
            LinkKind::Relative | LinkKind::Anchor | LinkKind::Scheme => {
                issues.push(Issue::error(
                    location,
                    format!(
                        "link target {:?} must be an internal route starting with '/' or an absolute URL",
                        link.link
                    ),
                ));
            }
        }
    }
    if let Some(pattern) = &link.active_match {
        if let Err(e) = Regex::new(pattern) {
            issues.push(Issue::error(
                location,
                format!("activeMatch is not a valid regex: {}", e),
            ));
        }
    }
}

fn check_sidebar(sidebar: &Sidebar, issues: &mut Vec<Issue>) {
    for (prefix, sections) in sidebar.iter() {
        let key_location = format!("themeConfig.sidebar['{}']", prefix);

        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            issues.push(Issue::error(
                &key_location,
                "sidebar keys must start and end with '/'",
            ));
        }
        for (s, section) in sections.iter().enumerate() {
            let location = format!("{}[{}]", key_location, s);

            if section.text.trim().is_empty() {
                issues.push(Issue::error(&location, "section text must not be empty"));
            }
            if section.items.is_empty() {
                issues.push(Issue::warning(&location, "section has no items"));
            }
            for (i, item) in section.items.iter().enumerate() {
                check_nav_item(item, &format!("{}.items[{}]", location, i), 0, issues);
            }
        }
    }
}

fn check_search(search: &SearchConfig, issues: &mut Vec<Issue>) {
    for (locale, entry) in &search.options.locales {
        for (key, value) in entry.translations.entries() {
            if value.trim().is_empty() {
                issues.push(Issue::error(
                    format!(
                        "themeConfig.search.options.locales['{}'].translations.{}",
                        locale, key
                    ),
                    "must not be empty",
                ));
            }
        }
    }
}

fn check_edit_link(edit: &EditLink, issues: &mut Vec<Issue>) {
    if !edit.pattern.contains(EDIT_PATH_PLACEHOLDER) {
        issues.push(Issue::warning(
            "themeConfig.editLink.pattern",
            "no \":path\" placeholder; every page gets the same edit URL",
        ));
    }
    if link::classify(&edit.pattern) != LinkKind::External {
        issues.push(Issue::error(
            "themeConfig.editLink.pattern",
            "must be an absolute URL",
        ));
    }
    if edit.text.trim().is_empty() {
        issues.push(Issue::error("themeConfig.editLink.text", "must not be empty"));
    }
}
