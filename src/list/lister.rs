//! Listing orchestrator

use std::io::Write;
use std::path::Path;

use crate::error::ListError;

use super::collect::collect_entries;
use super::config::ListConfig;
use super::order::{partition_dirs_first, sort_by_mtime};
use super::structure::describe_target;
use super::walk::walk;

/// Runs exactly one listing strategy per invocation and writes the result
/// to the sink it was built with.
///
/// Strategy priority: directory-only beats recursive beats plain listing.
/// Within the plain listing, time ordering beats dirs-first grouping.
pub struct Lister<W: Write> {
    config: ListConfig,
    out: W,
}

impl<W: Write> Lister<W> {
    pub fn new(config: ListConfig, out: W) -> Self {
        Self { config, out }
    }

    /// List `dir` according to the configuration.
    pub fn list(&mut self, dir: &Path) -> Result<(), ListError> {
        if self.config.directory_only {
            return self.show_structure(dir);
        }
        if self.config.recursive {
            return self.list_recursively(dir);
        }
        self.list_one_level(dir)
    }

    fn show_structure(&mut self, dir: &Path) -> Result<(), ListError> {
        let line = describe_target(dir)?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Emit every non-hidden path in the subtree, two spaces between
    /// tokens, on one continuous stream.
    fn list_recursively(&mut self, dir: &Path) -> Result<(), ListError> {
        let show_all = self.config.show_all;
        let out = &mut self.out;
        walk(dir, show_all, &mut |path| {
            write!(out, "{}  ", path.display())
        })
    }

    fn list_one_level(&mut self, dir: &Path) -> Result<(), ListError> {
        let entries = collect_entries(dir, &self.config)?;

        let entries = if self.config.time_sorted {
            sort_by_mtime(entries)
        } else if self.config.group_dirs_first {
            partition_dirs_first(entries)
        } else {
            entries
        };

        for entry in &entries {
            writeln!(self.out, "{}", entry.path.display())?;
        }
        Ok(())
    }
}
