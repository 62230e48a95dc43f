//! Audit command, optionally re-running on file changes.

use std::path::PathBuf;

use anyhow::Result;
use wayfinder_check::{AuditConfig, AuditReport, Auditor, FileWatcher, WatchEvent};
use wayfinder_config::Severity;

/// Run the check command.
pub async fn run(config_path: PathBuf, docs: PathBuf, strict: bool, watch: bool) -> Result<()> {
    let auditor = Auditor::new(AuditConfig {
        config_path: config_path.clone(),
        docs_dir: docs.clone(),
        strict,
    });

    let report = auditor.run()?;
    print_report(&report);

    if !watch {
        if report.has_errors() {
            anyhow::bail!("Audit failed with {} errors", report.errors());
        }
        return Ok(());
    }

    let (_watcher, mut rx) = FileWatcher::new(&[config_path, docs])?;
    tracing::info!("Watching for changes (Ctrl-C to stop)");

    while let Some(event) = rx.recv().await {
        let path = match &event {
            WatchEvent::ConfigModified(p)
            | WatchEvent::PageModified(p)
            | WatchEvent::Created(p)
            | WatchEvent::Deleted(p)
            | WatchEvent::Modified(p) => p,
        };
        tracing::info!("Change detected: {}", path.display());

        match auditor.run() {
            Ok(report) => print_report(&report),
            Err(e) => tracing::error!("Audit aborted: {}", e),
        }
    }

    Ok(())
}

fn print_report(report: &AuditReport) {
    for issue in &report.issues {
        match issue.severity {
            Severity::Error => tracing::error!("{}", issue),
            Severity::Warning => tracing::warn!("{}", issue),
        }
    }

    tracing::info!(
        "Checked {} pages, {} routes, {} links in {}ms: {} errors, {} warnings",
        report.pages,
        report.routes,
        report.links_checked,
        report.duration_ms,
        report.errors(),
        report.warnings()
    );
}
