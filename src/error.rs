//! Error type shared by the listing core

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by the listing core.
///
/// Every filesystem failure is reported through the `Filesystem` variant
/// with the path that triggered it; the core fails fast on the first one,
/// with no partial results. `Output` covers write failures on the sink the
/// caller handed in.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("cannot access '{}': {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl ListError {
    /// Wrap an I/O error with the path it concerns.
    pub fn filesystem(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
