use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        let metadata =
            fs::metadata(path).with_context(|| format!("cannot stat {}", path.display()))?;
        Ok(kind_of(metadata.is_dir()))
    }

    fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut entries = Vec::new();
        let listing =
            fs::read_dir(dir).with_context(|| format!("cannot read {}", dir.display()))?;

        for entry in listing {
            let entry = entry.with_context(|| format!("cannot read {}", dir.display()))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .with_context(|| format!("cannot stat {}", path.display()))?;

            // Symlinks count as whatever they point at; dangling ones are files.
            let is_dir = if file_type.is_symlink() {
                fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false)
            } else {
                file_type.is_dir()
            };

            entries.push(FsEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind: kind_of(is_dir),
                path,
            });
        }

        Ok(entries)
    }
}

fn kind_of(is_dir: bool) -> EntryKind {
    if is_dir {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}
