//! The target path's own structural line

use std::fs;
use std::path::{MAIN_SEPARATOR, Path};

use crate::error::ListError;

/// Render the single line describing `target` itself.
///
/// One trailing separator is stripped if present, then exactly one is put
/// back when `target` is a directory. Fails if the path doesn't exist or
/// can't be stat'd. Does not recurse or list children.
pub fn describe_target(target: &Path) -> Result<String, ListError> {
    let info = fs::metadata(target).map_err(|e| ListError::filesystem(target, e))?;

    let raw = target.to_string_lossy();
    let trimmed = raw.strip_suffix(MAIN_SEPARATOR).unwrap_or(&raw);

    if info.is_dir() {
        Ok(format!("{trimmed}{MAIN_SEPARATOR}"))
    } else {
        Ok(trimmed.to_string())
    }
}
