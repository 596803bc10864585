//! Reordering passes over a collected entry set

use super::entry::Entry;

/// Reorder entries by modification time, most recent first.
///
/// Comparison is over the structured timestamps, not their rendered form,
/// so the order never depends on a timestamp string format. The sort is
/// stable: entries with identical timestamps keep their input order.
pub fn sort_by_mtime(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by(|a, b| b.modified().cmp(&a.modified()));
    entries
}

/// Reorder entries so directories come first.
///
/// Relative order is preserved within each group, which also makes the
/// pass idempotent.
pub fn partition_dirs_first(entries: Vec<Entry>) -> Vec<Entry> {
    let (dirs, files): (Vec<Entry>, Vec<Entry>) =
        entries.into_iter().partition(Entry::is_dir);
    dirs.into_iter().chain(files).collect()
}
