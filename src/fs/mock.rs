use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    kinds: HashMap<PathBuf, EntryKind>,
    responses: HashMap<PathBuf, Response>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    /// Registers `dir` as a directory listing `entries`, in the given order.
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let dir = dir.into();
        let mut inner = self.inner.lock().expect("mock fs lock");
        for entry in &entries {
            inner.kinds.insert(entry.path.clone(), entry.kind);
        }
        inner.kinds.insert(dir.clone(), EntryKind::Directory);
        inner.responses.insert(dir, Response::Ok(entries));
    }

    pub fn set_file(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.kinds.insert(path.into(), EntryKind::File);
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let dir = dir.into();
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.kinds.insert(dir.clone(), EntryKind::Directory);
        inner.responses.insert(dir, Response::Err(message.into()));
    }

    /// Directories listed so far, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

impl FileSystem for MockFileSystem {
    fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner
            .kinds
            .get(path)
            .copied()
            .ok_or_else(|| anyhow!("no mock entry for {}", path.display()))
    }

    fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock response for {}", dir.display())),
        }
    }
}
