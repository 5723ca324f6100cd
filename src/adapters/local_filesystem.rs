//! `DeploymentFilesystem` implementation over the local disk.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::domain::AppError;
use crate::domain::paths::normalize_path;
use crate::domain::wrapper::hex_digest;
use crate::ports::{DeploymentFilesystem, TreeEntry};

/// Local-disk filesystem adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

/// Writer that hashes everything passing through it.
struct HashingWriter<W> {
    inner: W,
    hasher: Sha256,
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.hasher.update(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl DeploymentFilesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(AppError::from)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                paths.push(entry.path());
            }
        }
        paths.sort();
        Ok(paths)
    }

    fn remove_file(&self, path: &Path) -> Result<bool, AppError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(AppError::from(err)),
        }
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        // fs::copy truncates the destination before reading the source.
        if self.same_file(from, to) {
            return Ok(());
        }
        fs::copy(from, to).map(|_| ()).map_err(|source| AppError::Copy {
            from: from.display().to_string(),
            to: to.display().to_string(),
            source,
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(AppError::from)
    }

    fn write_atomic(
        &self,
        path: &Path,
        fill: &mut dyn FnMut(&mut dyn Write) -> Result<(), AppError>,
        accept: &dyn Fn(&str) -> Result<(), AppError>,
    ) -> Result<String, AppError> {
        let dir = path.parent().ok_or_else(|| {
            AppError::config_error(format!("No parent directory for {}", path.display()))
        })?;
        // Dropping the temp file on any early return removes it.
        let temp = NamedTempFile::new_in(dir)?;
        let mut writer = HashingWriter { inner: temp.as_file(), hasher: Sha256::new() };
        fill(&mut writer)?;
        writer.flush()?;
        let digest = hex_digest(writer.hasher);
        temp.as_file().sync_all()?;

        accept(&digest)?;
        temp.persist(path).map_err(|err| AppError::Io(err.error))?;
        Ok(digest)
    }

    fn set_executable(&self, path: &Path) -> Result<(), AppError> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).map_err(AppError::from)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(path, perms).map_err(AppError::from)?;
        }
        #[cfg(not(unix))]
        let _ = path;
        Ok(())
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => normalize_path(a) == normalize_path(b),
        }
    }

    fn sha256(&self, path: &Path) -> Result<String, AppError> {
        let mut file = fs::File::open(path)?;
        let mut hasher = Sha256::new();
        let mut buf = [0u8; 64 * 1024];
        loop {
            let read = file.read(&mut buf)?;
            if read == 0 {
                break;
            }
            hasher.update(&buf[..read]);
        }
        Ok(hex_digest(hasher))
    }

    fn walk_tree(&self, root: &Path) -> Vec<Result<TreeEntry, AppError>> {
        WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| {
                let entry = entry.map_err(|err| AppError::Io(io::Error::other(err.to_string())))?;
                let relative = entry.path().strip_prefix(root).map_err(|_| {
                    AppError::config_error(format!(
                        "Walked entry {} is outside {}",
                        entry.path().display(),
                        root.display()
                    ))
                })?;
                Ok(TreeEntry { relative: relative.to_path_buf(), is_dir: entry.file_type().is_dir() })
            })
            .collect()
    }
}
