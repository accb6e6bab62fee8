use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::VidcleanError;

/// Find every file under `root` whose name ends with `extension`.
///
/// Subdirectories are visited recursively, entries sorted by name within
/// each directory. Symlinked directories are not descended into, but any
/// other symlink is returned like a file, including a dangling one, so the
/// failure to open it is reported when the file is processed. Entries that
/// cannot be read are skipped.
pub fn locate(root: &Path, extension: &str) -> Result<Vec<PathBuf>, VidcleanError> {
    if !root.is_dir() {
        return Err(VidcleanError::RootNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if is_regular_file(&entry) && has_suffix(&entry, extension) {
            debug!("Found candidate: {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    info!("Located {} file(s) ending in {}", files.len(), extension);
    Ok(files)
}

fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    if entry.path_is_symlink() && !entry.path().is_dir() {
        if !entry.path().exists() {
            warn!("Dangling symlink: {}", entry.path().display());
        }
        return true;
    }
    false
}

fn has_suffix(entry: &DirEntry, extension: &str) -> bool {
    entry
        .file_name()
        .as_encoded_bytes()
        .ends_with(extension.as_bytes())
}
