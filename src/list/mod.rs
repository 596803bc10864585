//! Directory listing core
//!
//! Collection, filtering, ordering, and traversal of directory entries.
//! One listing invocation runs exactly one strategy:
//!
//! - structural line for the target itself (`-d`)
//! - recursive subtree walk (`-R`)
//! - one-level listing, optionally time-ordered or grouped dirs-first

mod collect;
mod config;
mod entry;
mod filter;
mod lister;
mod order;
mod structure;
mod walk;

pub use collect::collect_entries;
pub use config::ListConfig;
pub use entry::Entry;
pub use filter::is_hidden;
pub use lister::Lister;
pub use order::{partition_dirs_first, sort_by_mtime};
pub use structure::describe_target;
pub use walk::walk;
