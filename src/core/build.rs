use std::path::Path;

use tracing::debug;

use crate::fs::FileSystem;
use crate::models::{EntryKind, Node};

/// Default depth bound, matching the CLI's `--level` default.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Configuration options for building a tree.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Deepest level that still produces nodes; the starting path is level 0
    pub max_depth: usize,
    /// Whether to keep entries whose name starts with '.'
    pub show_hidden: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            show_hidden: false,
        }
    }
}

/// Build the tree rooted at `path`, starting at depth 0.
///
/// `path` must exist; the CLI checks this before calling in.
pub fn build_tree<F: FileSystem>(
    fs: &F,
    path: &Path,
    options: &BuildOptions,
) -> anyhow::Result<Option<Node>> {
    build(fs, path, 0, options)
}

/// Build the node for `path` as if it sat at `current_depth`.
///
/// Returns `None` once `current_depth` exceeds `options.max_depth`.
/// Directory entries keep the filesystem's listing order.
pub fn build<F: FileSystem>(
    fs: &F,
    path: &Path,
    current_depth: usize,
    options: &BuildOptions,
) -> anyhow::Result<Option<Node>> {
    if current_depth > options.max_depth {
        return Ok(None);
    }

    let kind = fs.entry_kind(path)?;
    build_entry(fs, path, entry_name(path), kind, current_depth, options).map(Some)
}

fn build_entry<F: FileSystem>(
    fs: &F,
    path: &Path,
    name: String,
    kind: EntryKind,
    current_depth: usize,
    options: &BuildOptions,
) -> anyhow::Result<Node> {
    if kind == EntryKind::File {
        return Ok(Node::file(name));
    }

    // Nothing below the bound would be produced, so skip the listing.
    if current_depth >= options.max_depth {
        debug!(path = %path.display(), depth = current_depth, "depth bound reached");
        return Ok(Node::directory(name, Vec::new()));
    }

    let mut children = Vec::new();
    for entry in fs.read_dir(path)? {
        if !options.show_hidden && entry.is_hidden() {
            debug!(path = %entry.path.display(), "skipping hidden entry");
            continue;
        }

        children.push(build_entry(
            fs,
            &entry.path,
            entry.name,
            entry.kind,
            current_depth + 1,
            options,
        )?);
    }

    Ok(Node::directory(name, children))
}

/// Base name of `path`, or the whole path when it has none (e.g. `/`).
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.as_os_str().to_string_lossy().into_owned())
}
