//! Docs tree discovery.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::page::Page;
use crate::routes::{self, RouteTable};

/// Result of scanning a docs tree.
#[derive(Debug)]
pub struct DocsTree {
    /// Pages that parsed, sorted by relative path.
    pub pages: Vec<Page>,

    /// Files that could not be read or parsed. Their routes still count as
    /// existing; a broken page is an authoring problem, not a dead link.
    pub failures: Vec<ScanFailure>,

    /// Every route the tree serves.
    pub routes: RouteTable,

    /// Non-markdown files (images, downloads), docs-root relative.
    pub assets: BTreeSet<String>,
}

/// A markdown file the scan could not load.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanFailure {
    pub rel_path: String,
    pub message: String,
}

/// Errors that abort a scan outright.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Docs directory not found: {0}")]
    MissingRoot(String),

    #[error("Failed to walk docs directory: {0}")]
    Walk(String),
}

/// Scan every markdown file under `root`.
pub fn scan_docs(root: &Path) -> Result<DocsTree, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.display().to_string()));
    }

    let mut files: Vec<(PathBuf, String)> = Vec::new();
    let mut assets: BTreeSet<String> = BTreeSet::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry.map_err(|e| ScanError::Walk(e.to_string()))?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let rel = unix_rel(path.strip_prefix(root).unwrap_or(path));
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext == "md" {
            files.push((path.to_path_buf(), rel));
        } else {
            assets.insert(rel);
        }
    }

    files.sort_by(|a, b| a.1.cmp(&b.1));

    let results: Vec<Result<Page, ScanFailure>> = files
        .par_iter()
        .map(|(path, rel)| load_page(path, rel))
        .collect();

    let mut pages = Vec::new();
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(page) => pages.push(page),
            Err(failure) => {
                tracing::warn!("Skipping {}: {}", failure.rel_path, failure.message);
                failures.push(failure);
            }
        }
    }

    let mut table = RouteTable::default();
    for (_, rel) in &files {
        if let Some(route) = routes::route_for(rel) {
            table.insert(route, rel.clone());
        }
    }

    tracing::debug!(
        "Scanned {} pages ({} routes) under {}",
        pages.len(),
        table.len(),
        root.display()
    );

    Ok(DocsTree {
        pages,
        failures,
        routes: table,
        assets,
    })
}

fn load_page(path: &Path, rel: &str) -> Result<Page, ScanFailure> {
    let content = fs::read_to_string(path).map_err(|e| ScanFailure {
        rel_path: rel.to_string(),
        message: e.to_string(),
    })?;

    Page::parse(path, rel, &content).map_err(|e| ScanFailure {
        rel_path: rel.to_string(),
        message: e.to_string(),
    })
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Docs-root relative path with `/` separators on every platform.
fn unix_rel(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
