//! Mapping between markdown source paths and site routes.
//!
//! A file `guide/introduction.md` is served at `/guide/introduction`;
//! `index.md` files are served at their directory route with a trailing
//! slash.

use std::collections::BTreeMap;

/// Route a markdown file at `rel_path` (docs-root relative, `/` separators)
/// is served at. Non-markdown paths have no route.
pub fn route_for(rel_path: &str) -> Option<String> {
    let stem = rel_path.strip_suffix(".md")?;

    if stem == "index" {
        return Some("/".to_string());
    }
    if let Some(dir) = stem.strip_suffix("/index") {
        return Some(format!("/{}/", dir));
    }
    Some(format!("/{}", stem))
}

/// Source file expected to back `route`, relative to the docs root.
pub fn source_for(route: &str) -> String {
    if route == "/" {
        return "index.md".to_string();
    }
    if let Some(dir) = route.strip_suffix('/') {
        return format!("{}/index.md", dir.trim_start_matches('/'));
    }
    format!("{}.md", route.trim_start_matches('/'))
}

/// Resolve a relative link written on the page at `base_route`.
///
/// `.md` and `.html` targets normalize to their route. Returns `None`
/// when `..` segments climb past the site root.
pub fn join_route(base_route: &str, relative: &str) -> Option<String> {
    let base_dir = match base_route.rfind('/') {
        Some(pos) => &base_route[..pos],
        None => "",
    };

    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    let mut dir = relative.ends_with('/');

    for seg in relative.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }

    if let Some(last) = segments.last().copied() {
        let stem = last
            .strip_suffix(".md")
            .or_else(|| last.strip_suffix(".html"));
        if let Some(stem) = stem {
            segments.pop();
            if stem == "index" {
                dir = true;
            } else {
                segments.push(stem);
            }
        }
    }

    if segments.is_empty() {
        return Some("/".to_string());
    }
    let mut route = format!("/{}", segments.join("/"));
    if dir {
        route.push('/');
    }
    Some(route)
}

/// All routes the docs tree serves, each mapped to its source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteTable(BTreeMap<String, String>);

impl RouteTable {
    pub fn insert(&mut self, route: String, rel_path: String) {
        self.0.insert(route, rel_path);
    }

    pub fn contains(&self, route: &str) -> bool {
        self.0.contains_key(route)
    }

    /// Source file backing `route`, if the route exists.
    pub fn source(&self, route: &str) -> Option<&str> {
        self.0.get(route).map(|rel| rel.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(route, rel)| (route.as_str(), rel.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
