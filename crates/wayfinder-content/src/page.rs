//! A parsed markdown page and its outbound links.

use std::path::{Path, PathBuf};

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::frontmatter::{extract_frontmatter, FrontmatterError};
use crate::routes;

/// A markdown page discovered in the docs tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Absolute path of the source file.
    pub source_path: PathBuf,

    /// Path relative to the docs root, with `/` separators.
    pub rel_path: String,

    /// Route the page is served at.
    pub route: String,

    /// Title from frontmatter, falling back to the first `#` heading,
    /// then to the file stem.
    pub title: String,

    /// Description from frontmatter.
    pub description: Option<String>,

    /// Whether the page opts into navigation. Pages with `nav: false`
    /// frontmatter are deliberately unlisted.
    pub nav: bool,

    /// Every link and image target in the page body, in document order.
    pub links: Vec<PageLink>,
}

/// A link found in a page body.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLink {
    /// Raw link target as written.
    pub url: String,

    /// 1-based line number in the source file.
    pub line: usize,
}

impl Page {
    /// Parse a page from its source text. `rel_path` must use `/` separators.
    pub fn parse(
        source_path: &Path,
        rel_path: &str,
        content: &str,
    ) -> Result<Page, FrontmatterError> {
        let (meta, body) = extract_frontmatter(content)?;
        let meta = meta.unwrap_or_default();

        // Line numbers from the body are offset by the frontmatter block.
        let line_offset = content[..content.len() - body.len()].matches('\n').count();

        let title = meta
            .title
            .or_else(|| first_heading(body))
            .unwrap_or_else(|| file_stem(rel_path).to_string());
        let route = routes::route_for(rel_path).unwrap_or_else(|| format!("/{}", rel_path));

        Ok(Page {
            source_path: source_path.to_path_buf(),
            rel_path: rel_path.to_string(),
            route,
            title,
            description: meta.description,
            nav: meta.nav,
            links: extract_links(body, line_offset),
        })
    }
}

fn file_stem(rel_path: &str) -> &str {
    let name = rel_path.rsplit('/').next().unwrap_or(rel_path);
    name.strip_suffix(".md").unwrap_or(name)
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Collect every link and image target in `body` with its 1-based line
/// number, shifted by `line_offset` lines of stripped frontmatter.
fn extract_links(body: &str, line_offset: usize) -> Vec<PageLink> {
    let mut links = Vec::new();

    for (event, range) in Parser::new_ext(body, parser_options()).into_offset_iter() {
        let dest_url = match event {
            Event::Start(Tag::Link { dest_url, .. })
            | Event::Start(Tag::Image { dest_url, .. }) => dest_url,
            _ => continue,
        };
        let line = body[..range.start].matches('\n').count() + 1 + line_offset;
        links.push(PageLink {
            url: dest_url.to_string(),
            line,
        });
    }

    links
}

/// Text of the first `#` heading, if the page has one.
fn first_heading(body: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut text = String::new();

    for event in Parser::new_ext(body, parser_options()) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_h1 = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                if text.is_empty() {
                    return None;
                }
                return Some(text);
            }
            Event::Text(t) | Event::Code(t) if in_h1 => text.push_str(&t),
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_with_frontmatter_and_links() {
        let source = "---\ntitle: 模块系统\n---\n\n# 模块系统\n\n参见 [生命周期](/dev/core/lifecycle) 与 [接口开发](../backend/api)。\n\n- [环境要求](./environment)\n";

        let page = Page::parse(Path::new("/docs/dev/core/modules.md"), "dev/core/modules.md", source)
            .unwrap();

        assert_eq!(page.route, "/dev/core/modules");
        assert_eq!(page.title, "模块系统");
        assert!(page.nav);
        assert_eq!(page.links.len(), 3);
        assert_eq!(page.links[0].url, "/dev/core/lifecycle");
        assert_eq!(page.links[0].line, 7);
        assert_eq!(page.links[1].url, "../backend/api");
        assert_eq!(page.links[1].line, 7);
        assert_eq!(page.links[2].url, "./environment");
        assert_eq!(page.links[2].line, 9);
    }

    #[test]
    fn title_falls_back_to_first_heading() {
        let source = "# 快速上手\n\n内容。\n";

        let page = Page::parse(Path::new("/docs/guide/getting-started.md"), "guide/getting-started.md", source)
            .unwrap();

        assert_eq!(page.title, "快速上手");
    }

    #[test]
    fn images_are_collected_alongside_links() {
        let source = "# 架构\n\n![架构图](/images/architecture.png)\n\n[概览](/guide/system-overview)\n";

        let page = Page::parse(Path::new("/docs/dev/core/architecture.md"), "dev/core/architecture.md", source)
            .unwrap();

        assert_eq!(page.links.len(), 2);
        assert_eq!(page.links[0].url, "/images/architecture.png");
        assert_eq!(page.links[0].line, 3);
        assert_eq!(page.links[1].url, "/guide/system-overview");
    }

    #[test]
    fn links_inside_code_fences_are_ignored() {
        let source = "# T\n\n```md\n[not a link](/nope)\n```\n\n[real](/guide/faq)\n";

        let page = Page::parse(Path::new("/docs/a.md"), "a.md", source).unwrap();

        assert_eq!(page.links.len(), 1);
        assert_eq!(page.links[0].url, "/guide/faq");
    }

    #[test]
    fn reference_links_resolve_to_their_definition() {
        let source = "见[配置][cfg]。\n\n[cfg]: /guide/configuration\n";

        let page = Page::parse(Path::new("/docs/a.md"), "a.md", source).unwrap();

        assert_eq!(page.links.len(), 1);
        assert_eq!(page.links[0].url, "/guide/configuration");
    }

    #[test]
    fn title_falls_back_to_file_stem() {
        let page = Page::parse(Path::new("/docs/guide/faq.md"), "guide/faq.md", "plain text\n").unwrap();

        assert_eq!(page.title, "faq");
        assert!(page.links.is_empty());
    }
}
