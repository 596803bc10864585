//! One-level entry collection

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ListError;

use super::config::ListConfig;
use super::entry::Entry;
use super::filter::is_hidden;

/// The `.` and `..` pseudo-entries shown ahead of real children with `-a`.
const DOT_ENTRIES: [&str; 2] = [".", ".."];

/// Join a directory with a child name for display.
///
/// Listing `.` shows bare names rather than `./name`, so the dot prefix is
/// left off there; everything else is a plain join.
pub(crate) fn display_path(dir: &Path, name: &OsStr) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::from(name)
    } else {
        dir.join(name)
    }
}

/// Read one level of `dir` and build the working entry set.
///
/// With `show_all`, the `.` and `..` pseudo-entries come first, stat'd from
/// the process's current working directory, then every child; without it,
/// children whose name starts with a period are skipped. Entries appear in
/// the order the OS reports them. Fails with the first filesystem error and
/// returns no partial set.
pub fn collect_entries(dir: &Path, config: &ListConfig) -> Result<Vec<Entry>, ListError> {
    let reader = fs::read_dir(dir).map_err(|e| ListError::filesystem(dir, e))?;

    let mut entries = Vec::new();

    if config.show_all {
        for dot in DOT_ENTRIES {
            let info = fs::metadata(dot).map_err(|e| ListError::filesystem(dot, e))?;
            entries.push(Entry::new(PathBuf::from(dot), info));
        }
    }

    for child in reader {
        let child = child.map_err(|e| ListError::filesystem(dir, e))?;
        let name = child.file_name();
        if is_hidden(&name.to_string_lossy(), config.show_all) {
            continue;
        }
        let info = child
            .metadata()
            .map_err(|e| ListError::filesystem(child.path(), e))?;
        entries.push(Entry::new(display_path(dir, &name), info));
    }

    Ok(entries)
}
