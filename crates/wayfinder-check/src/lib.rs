//! Site auditing for wayfinder.
//!
//! Cross-checks a site configuration against the markdown tree it describes:
//! every nav and sidebar link must resolve to a page, every page link must
//! resolve to a route, and pages nothing points at are flagged as orphans.

pub mod audit;
pub mod watcher;

pub use audit::{audit, AuditConfig, AuditError, AuditIssue, AuditReport, Auditor, Origin};
pub use watcher::{FileWatcher, WatchEvent};
