//! lsr - a small cross-platform stand-in for ls

pub mod error;
pub mod list;

pub use error::ListError;
pub use list::{
    Entry, ListConfig, Lister, collect_entries, describe_target, is_hidden,
    partition_dirs_first, sort_by_mtime, walk,
};
