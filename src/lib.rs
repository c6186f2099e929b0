pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod logging;
pub mod models;
pub mod xml;

use std::io;
use std::path::{Component, Path, PathBuf};

use error::TargetError;

/// Check that `path` names an existing directory and return it as an
/// absolute path, so `.` and relative paths get a meaningful root name.
/// Symlinks are not resolved: a link keeps its own name.
pub fn resolve_root(path: &Path) -> Result<PathBuf, TargetError> {
    let io_error = |source| TargetError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(TargetError::PathNotFound(path.to_path_buf()));
        }
        Err(err) => return Err(io_error(err)),
    };

    if !metadata.is_dir() {
        return Err(TargetError::NotADirectory(path.to_path_buf()));
    }

    std::path::absolute(path)
        .map(|absolute| normalize_lexically(&absolute))
        .map_err(io_error)
}

/// Drop `.` components and fold `..` into its parent without touching the
/// filesystem. `..` at the root stays at the root.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
