use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::adapters::LocalFilesystem;
use crate::domain::AppError;
use crate::ports::{DeploymentFilesystem, TreeEntry};

/// Local filesystem with injected removal or copy failures.
#[derive(Default)]
pub struct FaultyFilesystem {
    inner: LocalFilesystem,
    deny_removal: bool,
    failing_copy: Option<&'static str>,
}

impl FaultyFilesystem {
    /// Every removal of an existing file fails with permission denied.
    pub fn denying_removal() -> Self {
        Self { deny_removal: true, ..Self::default() }
    }

    /// Copies whose source file is named `name` fail.
    pub fn failing_copies_of(name: &'static str) -> Self {
        Self { failing_copy: Some(name), ..Self::default() }
    }
}

impl DeploymentFilesystem for FaultyFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.inner.create_dir_all(path)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        self.inner.list_files(dir)
    }

    fn remove_file(&self, path: &Path) -> Result<bool, AppError> {
        if self.deny_removal && path.exists() {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "file is locked").into());
        }
        self.inner.remove_file(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        if let Some(name) = self.failing_copy
            && from.file_name().is_some_and(|f| f == name)
        {
            return Err(AppError::Copy {
                from: from.display().to_string(),
                to: to.display().to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "file is locked"),
            });
        }
        self.inner.copy_file(from, to)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.inner.write_file(path, content)
    }

    fn write_atomic(
        &self,
        path: &Path,
        fill: &mut dyn FnMut(&mut dyn Write) -> Result<(), AppError>,
        accept: &dyn Fn(&str) -> Result<(), AppError>,
    ) -> Result<String, AppError> {
        self.inner.write_atomic(path, fill, accept)
    }

    fn set_executable(&self, path: &Path) -> Result<(), AppError> {
        self.inner.set_executable(path)
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        self.inner.same_file(a, b)
    }

    fn sha256(&self, path: &Path) -> Result<String, AppError> {
        self.inner.sha256(path)
    }

    fn walk_tree(&self, root: &Path) -> Vec<Result<TreeEntry, AppError>> {
        self.inner.walk_tree(root)
    }
}
