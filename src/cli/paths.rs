//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

/// Resolve the root directory.
///
/// If a root path is provided, returns it. Otherwise, falls back to the
/// current working directory, or "." if that cannot be determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve a possibly relative path against the root
pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Document identifier for an uploaded file: its final path component
pub fn document_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
