//! File watching for audit-on-change.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the file watcher.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// The site configuration changed
    ConfigModified(PathBuf),

    /// A markdown page was modified
    PageModified(PathBuf),

    /// File was created
    Created(PathBuf),

    /// File was deleted
    Deleted(PathBuf),

    /// Generic modification
    Modified(PathBuf),
}

/// Watches the config file and docs tree for changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given paths.
    ///
    /// Returns the watcher and a channel to receive events.
    pub fn new(
        paths: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for path in paths {
            if path.exists() {
                watcher
                    .watch(path, RecursiveMode::Recursive)
                    .map_err(std::io::Error::other)?;
            }
        }

        // Forward events from notify's callback thread, collapsing each
        // burst into its newest event once the debounce window goes quiet.
        let async_tx_clone = async_tx.clone();
        std::thread::spawn(move || {
            let debounce = Duration::from_millis(100);
            let mut pending: Option<WatchEvent> = None;

            loop {
                let next = if pending.is_some() {
                    sync_rx.recv_timeout(debounce)
                } else {
                    sync_rx.recv().map_err(|_| mpsc::RecvTimeoutError::Disconnected)
                };

                match next {
                    Ok(event) => {
                        for path in event.paths {
                            if let Some(e) = classify_event(&path, &event.kind) {
                                pending = Some(e);
                            }
                        }
                    }
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        if let Some(e) = pending.take() {
                            let _ = async_tx_clone.blocking_send(e);
                        }
                    }
                    Err(mpsc::RecvTimeoutError::Disconnected) => {
                        if let Some(e) = pending.take() {
                            let _ = async_tx_clone.blocking_send(e);
                        }
                        break;
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match kind {
        EventKind::Create(_) => Some(WatchEvent::Created(path.to_path_buf())),
        EventKind::Remove(_) => Some(WatchEvent::Deleted(path.to_path_buf())),
        EventKind::Modify(_) => {
            if ext == "md" {
                Some(WatchEvent::PageModified(path.to_path_buf()))
            } else if matches!(ext, "toml" | "json" | "yaml" | "yml") {
                Some(WatchEvent::ConfigModified(path.to_path_buf()))
            } else {
                Some(WatchEvent::Modified(path.to_path_buf()))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn watches_file_changes() {
        let temp = tempdir().unwrap();
        let test_file = temp.path().join("introduction.md");

        // Create the watcher first (so it catches file creation)
        let (watcher, mut rx) = FileWatcher::new(&[temp.path().to_path_buf()]).unwrap();

        // Give inotify time to set up
        tokio::time::sleep(Duration::from_millis(100)).await;

        fs::write(&test_file, "# Created").unwrap();

        // Wait for event with timeout
        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        drop(watcher);

        assert!(event.is_ok(), "timeout waiting for file watch event");
        assert!(event.unwrap().is_some(), "channel should not be closed");
    }

    #[tokio::test]
    async fn burst_collapses_to_the_newest_save() {
        let temp = tempdir().unwrap();
        let first = temp.path().join("introduction.md");
        let second = temp.path().join("getting-started.md");

        let (watcher, mut rx) = FileWatcher::new(&[temp.path().to_path_buf()]).unwrap();

        // Both saves land right after startup, inside one debounce window.
        fs::write(&first, "# v1").unwrap();
        fs::write(&second, "# v2").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        drop(watcher);

        let event = event.expect("timeout waiting for debounced event");
        match event {
            Some(WatchEvent::Created(path)) | Some(WatchEvent::PageModified(path)) => {
                assert!(path.ends_with("getting-started.md"), "got {:?}", path);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn classifies_by_extension() {
        let kind = notify::EventKind::Modify(notify::event::ModifyKind::Any);

        assert!(matches!(
            classify_event(Path::new("docs/guide/faq.md"), &kind),
            Some(WatchEvent::PageModified(_))
        ));
        assert!(matches!(
            classify_event(Path::new("site.toml"), &kind),
            Some(WatchEvent::ConfigModified(_))
        ));
        assert!(matches!(
            classify_event(Path::new("logo.png"), &kind),
            Some(WatchEvent::Modified(_))
        ));
    }
}
