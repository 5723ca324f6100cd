//! Filesystem operations used by the generation pipeline.
//!
//! All paths are absolute; layout resolution happens before any call.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// One entry of a recursive directory walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the walked root.
    pub relative: PathBuf,
    pub is_dir: bool,
}

/// Port for the filesystem the bundle is generated into.
pub trait DeploymentFilesystem {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Non-directory entries (files and symlinks) directly inside `dir`, sorted.
    /// Empty when `dir` is absent.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Remove a file. Returns `false` without error if it does not exist.
    fn remove_file(&self, path: &Path) -> Result<bool, AppError>;

    /// Copy a file, replacing the destination.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Write UTF-8 content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Stream bytes into `path` all-or-nothing.
    ///
    /// `fill` writes the content; `accept` sees the hex SHA-256 of what was
    /// written and may veto it. Nothing appears at `path` unless both succeed.
    /// Returns the digest of the persisted file.
    fn write_atomic(
        &self,
        path: &Path,
        fill: &mut dyn FnMut(&mut dyn Write) -> Result<(), AppError>,
        accept: &dyn Fn(&str) -> Result<(), AppError>,
    ) -> Result<String, AppError>;

    /// Set the executable bit on a file (Unix-only).
    fn set_executable(&self, path: &Path) -> Result<(), AppError>;

    /// Whether two paths refer to the same file.
    fn same_file(&self, a: &Path, b: &Path) -> bool;

    /// Hex SHA-256 of a file's content.
    fn sha256(&self, path: &Path) -> Result<String, AppError>;

    /// Recursive listing of `root`, parents before children. Entries that
    /// cannot be read are reported in place and do not stop the walk.
    fn walk_tree(&self, root: &Path) -> Vec<Result<TreeEntry, AppError>>;
}
