//! Typed configuration for an externally rendered documentation site.
//!
//! Models the configuration object the external site generator consumes:
//! navigation menus, sidebar trees, search-widget locale strings, head tags,
//! and edit-link settings. The record is loaded once, validated, and is
//! otherwise immutable; field names follow the generator's wire shape in
//! every supported format so re-serializing round-trips cleanly.

pub mod head;
pub mod link;
pub mod nav;
pub mod search;
pub mod sidebar;
pub mod site;
pub mod theme;
pub mod validate;

pub use head::HeadTag;
pub use link::LinkKind;
pub use nav::{ConfigLink, NavGroup, NavItem, NavLink};
pub use search::{SearchConfig, SearchProvider, SearchTranslations};
pub use sidebar::{ItemView, SectionView, Sidebar, SidebarSection, SidebarView};
pub use site::{ConfigError, SiteConfig};
pub use theme::{DocFooter, EditLink, Footer, LastUpdated, Outline, ThemeConfig};
pub use validate::{validate, Issue, Severity};
