//! Configuration for a single listing invocation

/// Immutable per-invocation configuration.
///
/// Built once from the CLI flags and passed by reference into the core;
/// nothing in the crate keeps process-wide mutable flag state.
#[derive(Debug, Clone, Default)]
pub struct ListConfig {
    /// Include hidden entries, plus the `.` and `..` pseudo-entries.
    pub show_all: bool,
    /// Describe the target path itself instead of listing its contents.
    pub directory_only: bool,
    /// Place directory entries ahead of file entries.
    pub group_dirs_first: bool,
    /// Walk the whole subtree instead of one level.
    pub recursive: bool,
    /// Order entries by modification time, most recent first.
    /// Takes effect over `group_dirs_first` when both are set.
    pub time_sorted: bool,
    /// Reserved: long/tabular per-entry formatting. Parsed, never consumed.
    pub long_format: bool,
    /// Reserved: quoted-name rendering. Parsed, never consumed.
    pub quote: bool,
}
