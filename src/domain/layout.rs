//! Resolved filesystem layout of a generation run.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::lifecycle::LifecycleScript;
use crate::domain::paths::{absolutize, contains_base_token, host_path, substitute_base_token};
use crate::domain::request::GenerationRequest;
use crate::domain::AppError;

/// Log directory as created on disk and as written into the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogLocation {
    /// Absolute directory created by the generator.
    pub directory: PathBuf,
    /// Value embedded in `<logpath>`; keeps `%BASE%` unexpanded.
    pub literal: String,
}

impl LogLocation {
    /// Resolve a raw log path relative to the bin directory.
    ///
    /// `%BASE%` is replaced with `bin_dir` only for the on-disk directory; the
    /// wrapper expands it itself relative to its own location at runtime.
    pub fn resolve(raw: &str, bin_dir: &Path, project_dir: &Path) -> Self {
        let literal = raw.trim().to_string();
        let physical = if contains_base_token(&literal) {
            substitute_base_token(&literal, &bin_dir.to_string_lossy())
        } else {
            literal.clone()
        };
        let directory = absolutize(project_dir, &host_path(&physical));
        Self { directory, literal }
    }
}

/// An additional directory to mirror next to the jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorTarget {
    pub name: String,
    pub source: PathBuf,
    pub target: PathBuf,
}

/// Absolute paths derived once per run from a `GenerationRequest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub bin_dir: PathBuf,
    /// Parent of `bin_dir`; receives mirrored directories.
    pub deployment_root: PathBuf,
    pub jar_output_dir: PathBuf,
    pub jar_source: PathBuf,
    pub jar_target: PathBuf,
    pub jar_file_name: String,
    pub executable: PathBuf,
    pub descriptor: PathBuf,
    pub log: LogLocation,
    pub mirrors: Vec<MirrorTarget>,
}

impl ResolvedLayout {
    pub fn resolve(request: &GenerationRequest) -> Result<Self, AppError> {
        let project_dir = &request.project_dir;
        let bin_dir = absolutize(project_dir, &request.output_dir);
        let deployment_root = bin_dir.parent().map(Path::to_path_buf).ok_or_else(|| {
            AppError::config_error(format!(
                "Output directory {} has no parent to use as deployment root",
                bin_dir.display()
            ))
        })?;
        let jar_output_dir = absolutize(project_dir, &request.jar_output_dir);
        let jar_source = absolutize(project_dir, &request.jar_source);
        let jar_file_name = request.jar_file_name();
        let jar_target = jar_output_dir.join(&jar_file_name);

        let mirrors = request
            .additional_directories
            .iter()
            .map(|name| MirrorTarget {
                name: name.clone(),
                source: absolutize(project_dir, &host_path(name)),
                target: absolutize(&deployment_root, &host_path(name)),
            })
            .collect();

        Ok(Self {
            executable: bin_dir.join(request.service_id.executable_name()),
            descriptor: bin_dir.join(request.service_id.descriptor_name()),
            log: LogLocation::resolve(&request.log_path, &bin_dir, project_dir),
            bin_dir,
            deployment_root,
            jar_output_dir,
            jar_source,
            jar_target,
            jar_file_name,
            mirrors,
        })
    }

    pub fn script_path(&self, script: LifecycleScript) -> PathBuf {
        self.bin_dir.join(script.file_name())
    }
}
