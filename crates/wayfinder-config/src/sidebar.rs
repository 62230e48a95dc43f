//! Sidebar trees keyed by route prefix.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::nav::{ConfigLink, NavItem};

/// Sidebar configuration: a map from route prefix to the section list shown
/// for routes under that prefix.
///
/// Keys are compared by simple prefix match; when several keys match a route
/// the longest one wins, so `/dev/` can carry a different tree than `/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar(pub BTreeMap<String, Vec<SidebarSection>>);

/// One titled, optionally collapsible section of a sidebar tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SidebarSection {
    /// Section heading.
    pub text: String,

    /// Whether the section starts collapsed. Omitting the field keeps the
    /// section expanded.
    #[serde(default)]
    pub collapsed: bool,

    /// Entries under the heading.
    pub items: Vec<NavItem>,
}

/// The sidebar resolved for one route: which prefix matched and its sections
/// with active states computed.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarView {
    pub prefix: String,
    pub sections: Vec<SectionView>,
}

/// A section of a resolved sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub text: String,
    pub collapsed: bool,
    pub items: Vec<ItemView>,
}

/// A resolved sidebar entry, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub text: String,
    pub link: Option<String>,
    pub active: bool,
    pub children: Vec<ItemView>,
}

impl Sidebar {
    /// Section list registered for exactly `prefix`, if any.
    pub fn get(&self, prefix: &str) -> Option<&[SidebarSection]> {
        self.0.get(prefix).map(|sections| sections.as_slice())
    }

    /// Iterate over `(prefix, sections)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarSection])> {
        self.0
            .iter()
            .map(|(prefix, sections)| (prefix.as_str(), sections.as_slice()))
    }

    /// The section list whose prefix matches `route`, preferring the longest
    /// matching prefix. Routes outside every prefix get no sidebar.
    pub fn select(&self, route: &str) -> Option<(&str, &[SidebarSection])> {
        self.0
            .iter()
            .filter(|(prefix, _)| route.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, sections)| (prefix.as_str(), sections.as_slice()))
    }

    /// Resolve the sidebar for `route`, marking the entry whose link equals
    /// the route as active. Groups are active when any descendant is.
    pub fn resolve(&self, route: &str) -> Option<SidebarView> {
        let (prefix, sections) = self.select(route)?;

        Some(SidebarView {
            prefix: prefix.to_string(),
            sections: sections
                .iter()
                .map(|section| SectionView {
                    text: section.text.clone(),
                    collapsed: section.collapsed,
                    items: section
                        .items
                        .iter()
                        .map(|item| resolve_item(item, route))
                        .collect(),
                })
                .collect(),
        })
    }

    /// Every link destination in every tree, labelled with its location path.
    pub fn links(&self) -> Vec<ConfigLink> {
        let mut out = Vec::new();
        for (prefix, sections) in &self.0 {
            for (s, section) in sections.iter().enumerate() {
                for (i, item) in section.items.iter().enumerate() {
                    let location =
                        format!("themeConfig.sidebar['{}'][{}].items[{}]", prefix, s, i);
                    item.collect_links(&location, &mut out);
                }
            }
        }
        out
    }
}

fn resolve_item(item: &NavItem, route: &str) -> ItemView {
    match item {
        NavItem::Link(link) => ItemView {
            text: link.text.clone(),
            link: Some(link.link.clone()),
            active: link.link == route,
            children: Vec::new(),
        },
        NavItem::Group(group) => {
            let children: Vec<ItemView> = group
                .items
                .iter()
                .map(|child| resolve_item(child, route))
                .collect();
            let active = children.iter().any(|child| child.active);

            ItemView {
                text: group.text.clone(),
                link: None,
                active,
                children,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavLink;

    fn link(text: &str, link: &str) -> NavItem {
        NavItem::Link(NavLink {
            text: text.to_string(),
            link: link.to_string(),
            active_match: None,
        })
    }

    fn sample() -> Sidebar {
        let mut map = BTreeMap::new();
        map.insert(
            "/guide/".to_string(),
            vec![SidebarSection {
                text: "开始使用".to_string(),
                collapsed: false,
                items: vec![link("框架介绍", "/guide/introduction")],
            }],
        );
        map.insert(
            "/dev/".to_string(),
            vec![
                SidebarSection {
                    text: "快速开始".to_string(),
                    collapsed: false,
                    items: vec![link("环境要求", "/dev/quick-start/environment")],
                },
                SidebarSection {
                    text: "核心概念".to_string(),
                    collapsed: false,
                    items: vec![
                        link("架构设计", "/dev/core/architecture"),
                        link("模块系统", "/dev/core/modules"),
                    ],
                },
            ],
        );
        Sidebar(map)
    }

    #[test]
    fn selects_tree_by_route_prefix() {
        let sidebar = sample();

        let (prefix, sections) = sidebar.select("/dev/core/modules").unwrap();

        assert_eq!(prefix, "/dev/");
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn longest_prefix_wins() {
        let mut sidebar = sample();
        sidebar.0.insert(
            "/".to_string(),
            vec![SidebarSection {
                text: "Root".to_string(),
                collapsed: false,
                items: vec![link("Home", "/")],
            }],
        );

        let (prefix, _) = sidebar.select("/guide/introduction").unwrap();

        assert_eq!(prefix, "/guide/");
    }

    #[test]
    fn route_outside_every_prefix_has_no_sidebar() {
        let sidebar = sample();

        assert!(sidebar.select("/changelog").is_none());
        assert!(sidebar.resolve("/changelog").is_none());
    }

    #[test]
    fn resolve_marks_matching_item_active() {
        let sidebar = sample();

        let view = sidebar.resolve("/dev/core/modules").unwrap();

        assert_eq!(view.prefix, "/dev/");
        let section = &view.sections[1];
        assert_eq!(section.text, "核心概念");
        assert!(!section.items[0].active);
        assert!(section.items[1].active);
        assert_eq!(section.items[1].link.as_deref(), Some("/dev/core/modules"));
    }

    #[test]
    fn collapsed_defaults_to_false() {
        let section: SidebarSection =
            serde_json::from_str(r#"{"text":"开始使用","items":[]}"#).unwrap();

        assert!(!section.collapsed);
    }

    #[test]
    fn links_carry_bracketed_locations() {
        let sidebar = sample();

        let links = sidebar.links();

        assert!(links.iter().any(|l| {
            l.location == "themeConfig.sidebar['/dev/'][1].items[1]"
                && l.url == "/dev/core/modules"
        }));
    }
}
