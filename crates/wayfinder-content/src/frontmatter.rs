//! Frontmatter extraction and parsing.

use serde::Deserialize;

/// Parsed frontmatter from a markdown page.
///
/// Pages carry arbitrary frontmatter (layout hints, hero blocks); only the
/// fields the tooling cares about are deserialized, the rest is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PageMeta {
    /// Page title override.
    #[serde(default)]
    pub title: Option<String>,

    /// Page description for SEO.
    #[serde(default)]
    pub description: Option<String>,

    /// Sort order among siblings (lower = first).
    #[serde(default)]
    pub order: Option<i32>,

    /// Whether the page should appear in navigation.
    #[serde(default = "default_true")]
    pub nav: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            order: None,
            nav: true,
        }
    }
}

/// Extract frontmatter from markdown content.
///
/// Returns the parsed frontmatter and the remaining content after the
/// frontmatter block.
pub fn extract_frontmatter(source: &str) -> Result<(Option<PageMeta>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = &after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    let meta: PageMeta = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok((Some(meta), remaining.trim_start()))
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}
