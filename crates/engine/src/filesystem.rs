use crate::classify::FileRecord;
use crate::error::{EngineError, Result};
use crossbeam_channel::Sender;
use ignore::{DirEntry, WalkBuilder};
use std::path::Path;
use tracing::debug;

/// Check that the scan root exists and is a directory.
///
/// # Errors
/// Returns [`EngineError::Root`] if the root cannot be stat'ed and
/// [`EngineError::NotADirectory`] if it is something else.
pub fn validate_root(root: &Path) -> Result<()> {
    let meta = std::fs::metadata(root).map_err(|e| EngineError::Root {
        path: root.to_path_buf(),
        source: e,
    })?;
    if !meta.is_dir() {
        return Err(EngineError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Entries whose name starts with `.` are hidden. The root is never hidden.
pub fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Sequential recursive walk feeding every non-directory entry to `tx`.
///
/// Hidden entries are skipped (whole subtree for directories), ignore files
/// are not consulted and symlinked directories are not followed. Traversal
/// errors prune the failing subtree and the walk goes on. The root must
/// already have passed [`validate_root`].
///
/// Returns the number of files sent.
pub fn walk_files(root: &Path, tx: &Sender<FileRecord>) -> u64 {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(|entry| !is_hidden(entry));

    let mut sent = 0u64;
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                debug!(error = %err, "skipping unreadable path");
                continue;
            }
        };
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        if tx.send(FileRecord::new(entry.into_path())).is_err() {
            // Receivers are gone; nobody is left to count.
            break;
        }
        sent += 1;
    }

    sent
}
