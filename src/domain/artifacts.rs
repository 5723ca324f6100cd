//! Enumeration of previously generated files eligible for cleanup.

use std::path::{Path, PathBuf};

use crate::domain::lifecycle::LifecycleScript;

const CLEANED_EXTENSIONS: [&str; 2] = ["exe", "xml"];

/// Whether a bin-directory file name matches `*.exe` or `*.xml`.
pub fn is_generated_binary_or_descriptor(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CLEANED_EXTENSIONS.iter().any(|c| ext.eq_ignore_ascii_case(c)))
}

/// Stale artifacts computed from a bin-directory listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    paths: Vec<PathBuf>,
}

impl ArtifactSet {
    /// Build the set from the regular files currently in the bin directory.
    ///
    /// `jar_target` is included unless `same_as_source` says it is the input jar.
    pub fn collect(
        bin_files: &[PathBuf],
        bin_dir: &Path,
        jar_target: &Path,
        same_as_source: bool,
    ) -> Self {
        let mut paths: Vec<PathBuf> = bin_files
            .iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(is_generated_binary_or_descriptor)
            })
            .cloned()
            .collect();

        for script in LifecycleScript::ALL {
            let path = bin_dir.join(script.file_name());
            if !paths.contains(&path) {
                paths.push(path);
            }
        }

        if !same_as_source && !paths.iter().any(|p| p == jar_target) {
            paths.push(jar_target.to_path_buf());
        }

        Self { paths }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}
