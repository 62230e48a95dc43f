//! Head tag descriptors.
//!
//! Each entry is a `[tagName, attributes]` pair the external generator emits
//! verbatim into the page head, in list order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Elements that take no closing tag.
const VOID_TAGS: &[&str] = &["base", "br", "link", "meta"];

/// A `[tagName, attributes]` pair in the generator's wire shape.
///
/// Serializes as a two-element sequence; attribute order is deterministic
/// (sorted), so emission is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag(pub String, pub BTreeMap<String, String>);

impl HeadTag {
    /// Build a tag from a name and attribute pairs.
    pub fn new(tag: &str, attrs: &[(&str, &str)]) -> Self {
        let map = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self(tag.to_string(), map)
    }

    /// Tag name (`meta`, `link`, `script`, …).
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Attribute map, sorted by name.
    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.1
    }

    /// Render the HTML fragment the generator emits for this tag.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(&self.0);
        for (name, value) in &self.1 {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        if !VOID_TAGS.contains(&self.0.as_str()) {
            out.push_str("</");
            out.push_str(&self.0);
            out.push('>');
        }
        out
    }
}

/// Escape a value for an HTML attribute position.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
