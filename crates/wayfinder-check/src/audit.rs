//! Dead link auditing across configuration and content.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use wayfinder_config::link::{self, LinkKind};
use wayfinder_config::site::ConfigError;
use wayfinder_config::validate::Severity;
use wayfinder_config::SiteConfig;
use wayfinder_content::routes::source_for;
use wayfinder_content::scan::ScanError;
use wayfinder_content::{join_route, scan_docs, DocsTree};

/// Configuration for an audit run.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Site configuration file.
    pub config_path: PathBuf,

    /// Root of the markdown tree.
    pub docs_dir: PathBuf,

    /// Keep dead links as errors even when the config ignores them.
    pub strict: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("site.toml"),
            docs_dir: PathBuf::from("docs"),
            strict: false,
        }
    }
}

/// Errors that abort an audit before any checking happens.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Where an audit finding comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A field in the site configuration.
    Config { location: String },

    /// A line in a markdown page.
    Page { rel_path: String, line: usize },

    /// A file in the docs tree.
    Docs { rel_path: String },
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Config { location } => write!(f, "{}", location),
            Origin::Page { rel_path, line } => write!(f, "{}:{}", rel_path, line),
            Origin::Docs { rel_path } => write!(f, "{}", rel_path),
        }
    }
}

/// A single audit finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditIssue {
    pub severity: Severity,
    pub origin: Origin,
    pub message: String,
}

impl fmt::Display for AuditIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.origin, self.message)
    }
}

/// Result of an audit run.
#[derive(Debug)]
pub struct AuditReport {
    /// Every finding, config issues first, then link and tree findings.
    pub issues: Vec<AuditIssue>,

    /// Number of pages that parsed.
    pub pages: usize,

    /// Number of routes the tree serves.
    pub routes: usize,

    /// Number of link targets checked against the route table.
    pub links_checked: usize,

    /// Total audit time in milliseconds.
    pub duration_ms: u64,
}

impl AuditReport {
    pub fn errors(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warnings(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors() > 0
    }
}

/// Site auditor.
pub struct Auditor {
    config: AuditConfig,
}

impl Auditor {
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Load the configuration, scan the docs tree, and audit one against
    /// the other.
    pub fn run(&self) -> Result<AuditReport, AuditError> {
        let start = Instant::now();

        let mut site = SiteConfig::load(&self.config.config_path)?;
        if self.config.strict {
            site.ignore_dead_links = false;
        }
        let tree = scan_docs(&self.config.docs_dir)?;

        let mut report = audit(&site, &tree);
        report.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Audited {} pages, {} links: {} errors, {} warnings",
            report.pages,
            report.links_checked,
            report.errors(),
            report.warnings()
        );

        Ok(report)
    }
}

/// What a link target resolves to within the site.
enum Target {
    /// A route to check against the table.
    Route(String),
    /// A non-page file (image, archive), checked against the scanned
    /// asset set. Docs-root relative.
    Asset(String),
    /// Climbs past the docs root.
    Outside,
    /// External, scheme, or bare anchor. Not audited.
    Skipped,
}

fn resolve_target(base_route: &str, url: &str) -> Target {
    let target = link::strip_extras(url);

    match link::classify(url) {
        LinkKind::External | LinkKind::Scheme | LinkKind::Anchor => Target::Skipped,
        LinkKind::Internal => to_target(join_route("/", target.trim_start_matches('/'))),
        LinkKind::Relative => {
            if target.is_empty() {
                // Pure query string, a self link.
                return Target::Skipped;
            }
            to_target(join_route(base_route, target))
        }
    }
}

fn to_target(route: Option<String>) -> Target {
    match route {
        Some(route) if is_asset(&route) => {
            Target::Asset(route.trim_start_matches('/').to_string())
        }
        Some(route) => Target::Route(route),
        None => Target::Outside,
    }
}

/// Whether the final path segment names a file rather than a page route.
/// `.md` and `.html` suffixes were already folded into the route by
/// `join_route`.
fn is_asset(route: &str) -> bool {
    route
        .rsplit('/')
        .next()
        .map(|seg| seg.contains('.'))
        .unwrap_or(false)
}

/// Audit `site` against `tree`. Pure; loading and scanning are the
/// caller's job.
pub fn audit(site: &SiteConfig, tree: &DocsTree) -> AuditReport {
    let mut issues: Vec<AuditIssue> = site
        .validate()
        .into_iter()
        .map(|issue| AuditIssue {
            severity: issue.severity,
            origin: Origin::Config {
                location: issue.location,
            },
            message: issue.message,
        })
        .collect();

    // ignoreDeadLinks demotes dead links so a known-incomplete tree can
    // still pass; everything else keeps its severity.
    let dead = if site.ignore_dead_links {
        Severity::Warning
    } else {
        Severity::Error
    };

    let mut checked = 0usize;
    let mut referenced: BTreeSet<String> = BTreeSet::new();

    for config_link in site.theme.links() {
        let origin = Origin::Config {
            location: config_link.location,
        };
        match resolve_target("/", &config_link.url) {
            Target::Route(route) => {
                checked += 1;
                if !tree.routes.contains(&route) {
                    issues.push(AuditIssue {
                        severity: dead,
                        origin,
                        message: dead_link(&config_link.url, &source_for(&route)),
                    });
                }
                referenced.insert(route);
            }
            Target::Asset(rel) => {
                checked += 1;
                if !tree.assets.contains(&rel) {
                    issues.push(AuditIssue {
                        severity: dead,
                        origin,
                        message: dead_link(&config_link.url, &rel),
                    });
                }
            }
            Target::Outside => issues.push(AuditIssue {
                severity: dead,
                origin,
                message: format!("link {:?} climbs past the docs root", config_link.url),
            }),
            Target::Skipped => {}
        }
    }

    for page in &tree.pages {
        for page_link in &page.links {
            let origin = Origin::Page {
                rel_path: page.rel_path.clone(),
                line: page_link.line,
            };
            match resolve_target(&page.route, &page_link.url) {
                Target::Route(route) => {
                    checked += 1;
                    if !tree.routes.contains(&route) {
                        issues.push(AuditIssue {
                            severity: dead,
                            origin,
                            message: dead_link(&page_link.url, &source_for(&route)),
                        });
                    }
                    referenced.insert(route);
                }
                Target::Asset(rel) => {
                    checked += 1;
                    if !tree.assets.contains(&rel) {
                        issues.push(AuditIssue {
                            severity: dead,
                            origin,
                            message: dead_link(&page_link.url, &rel),
                        });
                    }
                }
                Target::Outside => issues.push(AuditIssue {
                    severity: dead,
                    origin,
                    message: format!("link {:?} climbs past the docs root", page_link.url),
                }),
                Target::Skipped => {}
            }
        }
    }

    for failure in &tree.failures {
        issues.push(AuditIssue {
            severity: Severity::Error,
            origin: Origin::Docs {
                rel_path: failure.rel_path.clone(),
            },
            message: failure.message.clone(),
        });
    }

    // Orphan detection needs the full reference graph; the links of a
    // page that failed to parse are unknown, so it only runs when every
    // page parsed.
    if tree.failures.is_empty() {
        // Pages opting out of navigation with `nav: false` are deliberately
        // unlisted, not orphans.
        let unlisted: BTreeSet<&str> = tree
            .pages
            .iter()
            .filter(|p| !p.nav)
            .map(|p| p.rel_path.as_str())
            .collect();

        for (route, rel_path) in tree.routes.iter() {
            if route == "/" || referenced.contains(route) || unlisted.contains(rel_path) {
                continue;
            }
            issues.push(AuditIssue {
                severity: Severity::Warning,
                origin: Origin::Docs {
                    rel_path: rel_path.to_string(),
                },
                message: format!("route {} is not linked from the config or any page", route),
            });
        }
    }

    AuditReport {
        issues,
        pages: tree.pages.len(),
        routes: tree.routes.len(),
        links_checked: checked,
        duration_ms: 0,
    }
}

fn dead_link(url: &str, expected: &str) -> String {
    format!("dead link {:?}: no {}", url, expected)
}
