//! Core types shared across the keeper.

use std::path::{Path, PathBuf};

/// FileKey: canonical absolute path of the file an outline belongs to
pub type FileKey = PathBuf;

/// Canonicalize a host-reported file path into a `FileKey`.
///
/// Unsaved buffers may not exist on disk yet; their reported path is used as-is.
pub fn file_key(path: &Path) -> FileKey {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
