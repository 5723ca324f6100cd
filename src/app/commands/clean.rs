//! Removal of artifacts left by a previous generation run.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::{AppError, ArtifactSet, ResolvedLayout};
use crate::ports::DeploymentFilesystem;

/// Delete stale wrapper binaries, descriptors, scripts, and the copied jar.
///
/// Absent files are skipped. The first failed deletion aborts the cleanup.
pub fn execute<F: DeploymentFilesystem>(
    filesystem: &F,
    layout: &ResolvedLayout,
) -> Result<Vec<PathBuf>, AppError> {
    let same_as_source = filesystem.same_file(&layout.jar_target, &layout.jar_source);
    let bin_files = filesystem.list_files(&layout.bin_dir)?;
    let artifacts =
        ArtifactSet::collect(&bin_files, &layout.bin_dir, &layout.jar_target, same_as_source);

    let mut removed = Vec::new();
    for path in artifacts.paths() {
        if filesystem.remove_file(path).map_err(|err| cleanup_error(path, err))? {
            debug!(path = %path.display(), "Removed previous artifact");
            removed.push(path.clone());
        }
    }

    if !removed.is_empty() {
        info!(count = removed.len(), dir = %layout.bin_dir.display(), "Cleaned previous artifacts");
    }
    Ok(removed)
}

fn cleanup_error(path: &Path, err: AppError) -> AppError {
    match err {
        AppError::Io(source) => AppError::Cleanup { path: path.display().to_string(), source },
        other => other,
    }
}
