use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::core::stripper::FieldStripper;
use crate::error::FileError;
use crate::models::FileOutcome;

/// Suffix appended to a file's name for its backup copy
pub const BACKUP_SUFFIX: &str = ".backup";

/// How a single file is handled once its values are stripped
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    /// Compute removals without touching the file
    pub dry_run: bool,
    /// Copy the original bytes to `<file>.backup` before rewriting
    pub backup: bool,
}

/// Read, strip and conditionally rewrite one file.
///
/// The file is written only when at least one value was erased. Read,
/// decode and write failures are returned for the caller to report.
pub fn process_file(
    path: &Path,
    stripper: &FieldStripper,
    options: ProcessOptions,
) -> Result<FileOutcome, FileError> {
    let bytes = fs::read(path).map_err(|e| FileError::Read(path.to_path_buf(), e))?;
    let text = String::from_utf8(bytes).map_err(|e| FileError::Decode(path.to_path_buf(), e))?;

    let outcome = stripper.strip(&text);

    let mut result = FileOutcome {
        path: path.to_path_buf(),
        removed: outcome.removed,
        written: false,
        backup: None,
    };

    if !outcome.changed {
        debug!("No target values in {}", path.display());
        return Ok(result);
    }

    if options.dry_run {
        debug!("Dry run, leaving {} untouched", path.display());
        return Ok(result);
    }

    if options.backup {
        let backup_path = backup_path_for(path);
        fs::write(&backup_path, text.as_bytes())
            .map_err(|e| FileError::Backup(path.to_path_buf(), e))?;
        info!("Backup written: {}", backup_path.display());
        result.backup = Some(backup_path);
    }

    replace_contents(path, outcome.text.as_bytes())
        .map_err(|e| FileError::Write(path.to_path_buf(), e))?;
    result.written = true;
    info!(
        "Erased {} value(s) in {}",
        result.removed.len(),
        path.display()
    );

    Ok(result)
}

/// Write `data` to a temp file next to `path`, then rename it over `path`.
///
/// The original stays intact until the rename, and keeps its permissions.
fn replace_contents(path: &Path, data: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path)?.permissions();

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(data)?;
    temp.flush()?;
    temp.as_file().set_permissions(permissions)?;

    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// `data/page.json` -> `data/page.json.backup`
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}
