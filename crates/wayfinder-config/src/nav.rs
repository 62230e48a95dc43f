//! Top navigation bar entries.

use serde::{Deserialize, Serialize};

/// A navigation bar entry: a plain link or a one-level dropdown group.
///
/// Array order is display order (left to right in the rendered bar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    Group(NavGroup),
    Link(NavLink),
}

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavLink {
    /// Display text.
    pub text: String,

    /// Internal route or absolute external URL.
    pub link: String,

    /// Regex matched against the current route to force the active state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
}

/// A labeled dropdown of navigation links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavGroup {
    /// Dropdown label.
    pub text: String,

    /// Entries shown when the dropdown opens.
    pub items: Vec<NavItem>,
}

/// A link destination somewhere in the configuration, with the dotted
/// location path it was found at (in the generator's field naming).
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigLink {
    pub location: String,
    pub url: String,
}

impl NavItem {
    /// Display text of this entry.
    pub fn text(&self) -> &str {
        match self {
            NavItem::Link(link) => &link.text,
            NavItem::Group(group) => &group.text,
        }
    }

    /// Whether this entry renders as active for `route`. A dropdown group is
    /// active when any of its entries is.
    pub fn is_active(&self, route: &str) -> bool {
        match self {
            NavItem::Link(link) => link.is_active(route),
            NavItem::Group(group) => group.items.iter().any(|item| item.is_active(route)),
        }
    }

    /// All links beneath this entry, in display order.
    pub fn links(&self) -> Vec<&NavLink> {
        let mut out = Vec::new();
        self.push_links(&mut out);
        out
    }

    fn push_links<'a>(&'a self, out: &mut Vec<&'a NavLink>) {
        match self {
            NavItem::Link(link) => out.push(link),
            NavItem::Group(group) => {
                for item in &group.items {
                    item.push_links(out);
                }
            }
        }
    }

    /// Collect every link destination beneath this entry into `out`,
    /// labelling each with its location path.
    pub fn collect_links(&self, location: &str, out: &mut Vec<ConfigLink>) {
        match self {
            NavItem::Link(link) => out.push(ConfigLink {
                location: location.to_string(),
                url: link.link.clone(),
            }),
            NavItem::Group(group) => {
                for (i, item) in group.items.iter().enumerate() {
                    item.collect_links(&format!("{}.items[{}]", location, i), out);
                }
            }
        }
    }
}

impl NavLink {
    /// Whether this link renders as active for `route`.
    ///
    /// An `activeMatch` pattern takes precedence; without one, the link is
    /// active on an exact route match or when the route lives under a
    /// directory link. Invalid patterns never match; validation reports them.
    pub fn is_active(&self, route: &str) -> bool {
        if let Some(pattern) = &self.active_match {
            return regex::Regex::new(pattern)
                .map(|re| re.is_match(route))
                .unwrap_or(false);
        }
        if route == self.link {
            return true;
        }
        self.link.ends_with('/') && self.link != "/" && route.starts_with(&self.link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_plain_link() {
        let item: NavItem = serde_json::from_str(r#"{"text":"首页","link":"/"}"#).unwrap();

        match item {
            NavItem::Link(link) => {
                assert_eq!(link.text, "首页");
                assert_eq!(link.link, "/");
                assert!(link.active_match.is_none());
            }
            NavItem::Group(_) => panic!("expected a link"),
        }
    }

    #[test]
    fn deserializes_dropdown_group() {
        let item: NavItem = serde_json::from_str(
            r#"{"text":"相关链接","items":[{"text":"GitHub","link":"https://example.com"}]}"#,
        )
        .unwrap();

        match item {
            NavItem::Group(group) => {
                assert_eq!(group.text, "相关链接");
                assert_eq!(group.items.len(), 1);
            }
            NavItem::Link(_) => panic!("expected a group"),
        }
    }

    #[test]
    fn serializes_active_match_in_camel_case() {
        let item = NavItem::Link(NavLink {
            text: "Guide".to_string(),
            link: "/guide/introduction".to_string(),
            active_match: Some("^/guide/".to_string()),
        });

        let json = serde_json::to_string(&item).unwrap();

        assert!(json.contains(r#""activeMatch":"^/guide/""#));
    }

    #[test]
    fn rejects_entry_with_both_link_and_items() {
        let result: Result<NavItem, _> =
            serde_json::from_str(r#"{"text":"x","link":"/x","items":[]}"#);

        assert!(result.is_err());
    }

    #[test]
    fn exact_link_is_active() {
        let link = NavLink {
            text: "Home".to_string(),
            link: "/".to_string(),
            active_match: None,
        };

        assert!(link.is_active("/"));
        assert!(!link.is_active("/guide/introduction"));
    }

    #[test]
    fn directory_link_is_active_for_nested_routes() {
        let link = NavLink {
            text: "Guide".to_string(),
            link: "/guide/".to_string(),
            active_match: None,
        };

        assert!(link.is_active("/guide/"));
        assert!(link.is_active("/guide/introduction"));
        assert!(!link.is_active("/dev/core/modules"));
    }

    #[test]
    fn active_match_pattern_wins() {
        let link = NavLink {
            text: "开发手册".to_string(),
            link: "/dev/quick-start/environment".to_string(),
            active_match: Some("^/dev/".to_string()),
        };

        assert!(link.is_active("/dev/core/modules"));
        assert!(!link.is_active("/guide/introduction"));
    }

    #[test]
    fn group_is_active_when_any_child_is() {
        let group = NavItem::Group(NavGroup {
            text: "More".to_string(),
            items: vec![
                NavItem::Link(NavLink {
                    text: "FAQ".to_string(),
                    link: "/guide/faq".to_string(),
                    active_match: None,
                }),
                NavItem::Link(NavLink {
                    text: "GitHub".to_string(),
                    link: "https://example.com".to_string(),
                    active_match: None,
                }),
            ],
        });

        assert!(group.is_active("/guide/faq"));
        assert!(!group.is_active("/guide/introduction"));
    }

    #[test]
    fn collects_links_with_locations() {
        let group = NavItem::Group(NavGroup {
            text: "More".to_string(),
            items: vec![NavItem::Link(NavLink {
                text: "FAQ".to_string(),
                link: "/guide/faq".to_string(),
                active_match: None,
            })],
        });

        let mut out = Vec::new();
        group.collect_links("themeConfig.nav[3]", &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].location, "themeConfig.nav[3].items[0]");
        assert_eq!(out[0].url, "/guide/faq");
    }
}
