//! Recursive subtree traversal

use std::fs;
use std::io;
use std::path::Path;

use crate::error::ListError;

use super::collect::display_path;
use super::filter::is_hidden;

/// Pre-order walk of the subtree rooted at `root`.
///
/// Every reachable path is visited, children in file-name order, and
/// `emit` is called for each one that isn't suppressed. A path is
/// suppressed when any of its components at or below the root's own name
/// is hidden; descent is never pruned, so the walk still enters hidden
/// directories and emits their contents again once `show_all` is set.
/// A `.`-rooted walk prints bare child names (clean joins) and suppresses
/// the `.` token itself. Symlinks are emitted but not followed. Aborts
/// with the first filesystem error.
pub fn walk<F>(root: &Path, show_all: bool, emit: &mut F) -> Result<(), ListError>
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let info = fs::symlink_metadata(root).map_err(|e| ListError::filesystem(root, e))?;

    if !is_hidden(&root_component(root), show_all) {
        emit(root)?;
    }

    if !info.is_dir() {
        return Ok(());
    }

    // `.` and `..` roots name the walk's own position, not a hidden
    // directory, so they don't taint their children; a root that is a
    // genuinely hidden directory (e.g. `.git`) does.
    let inherited = root
        .file_name()
        .is_some_and(|n| is_hidden(&n.to_string_lossy(), show_all));
    walk_children(root, inherited, show_all, emit)
}

/// Last textual component of the root, for roots like `.` and `..` whose
/// `file_name()` is `None`.
fn root_component(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| {
            root.components()
                .next_back()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .unwrap_or_default()
        })
}

fn walk_children<F>(
    dir: &Path,
    hidden: bool,
    show_all: bool,
    emit: &mut F,
) -> Result<(), ListError>
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let reader = fs::read_dir(dir).map_err(|e| ListError::filesystem(dir, e))?;
    let mut children = reader
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ListError::filesystem(dir, e))?;
    children.sort_by_key(|c| c.file_name());

    for child in children {
        let name = child.file_name();
        let path = display_path(dir, &name);
        let child_hidden = hidden || is_hidden(&name.to_string_lossy(), show_all);

        if !child_hidden {
            emit(&path)?;
        }

        let file_type = child
            .file_type()
            .map_err(|e| ListError::filesystem(&path, e))?;
        if file_type.is_dir() {
            walk_children(&path, child_hidden, show_all, emit)?;
        }
    }

    Ok(())
}
