mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

pub trait FileSystem {
    /// Kind of the entry at `path`, following symlinks.
    fn entry_kind(&self, path: &Path) -> Result<EntryKind>;

    /// Immediate entries of `dir` in the order the filesystem lists them.
    fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;
}
