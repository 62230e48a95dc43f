//! Markdown content scanning for wayfinder.
//!
//! Walks a docs tree, derives the route each markdown file is served at,
//! and extracts the outbound links on every page so the audit layer can
//! check them against the configuration.

pub mod frontmatter;
pub mod page;
pub mod routes;
pub mod scan;

pub use frontmatter::{extract_frontmatter, FrontmatterError, PageMeta};
pub use page::{Page, PageLink};
pub use routes::{join_route, route_for, source_for, RouteTable};
pub use scan::{scan_docs, DocsTree, ScanError, ScanFailure};
