//! A single collected directory entry

use std::fs::Metadata;
use std::path::PathBuf;
use std::time::SystemTime;

/// One filesystem object with its display path and metadata.
///
/// The path is the string the entry is displayed as: the listed directory
/// joined with the child's name, or the bare `.`/`..` for pseudo-entries.
/// Entries are immutable once constructed and owned by the `Vec<Entry>`
/// produced for one listing pass.
#[derive(Debug)]
pub struct Entry {
    pub path: PathBuf,
    pub info: Metadata,
}

impl Entry {
    pub fn new(path: PathBuf, info: Metadata) -> Self {
        Self { path, info }
    }

    /// Bare file name, falling back to the full path for `.` and `..`.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    pub fn is_dir(&self) -> bool {
        self.info.is_dir()
    }

    /// Modification time. Platforms without mtime sort as oldest.
    pub fn modified(&self) -> SystemTime {
        self.info.modified().unwrap_or(SystemTime::UNIX_EPOCH)
    }
}
