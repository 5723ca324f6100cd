//! Bundle configuration loading from the project directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::{self, CONFIG_FILE_NAME};
use crate::domain::paths::absolutize;
use crate::domain::{AppError, BundleConfig};

/// A parsed configuration and the directory its relative paths resolve against.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: BundleConfig,
    pub project_dir: PathBuf,
    /// File the configuration was read from, if any.
    pub source: Option<PathBuf>,
}

/// Load the bundle configuration.
///
/// An explicit `config_path` must exist. Without one, `winsw-bundle.toml` in
/// the project directory is used when present, else defaults apply. The
/// project directory defaults to the config file's directory, then `cwd`.
pub fn load_config(
    cwd: &Path,
    config_path: Option<&Path>,
    project_dir: Option<&Path>,
) -> Result<LoadedConfig, AppError> {
    let explicit_project = project_dir.map(|dir| absolutize(cwd, dir));

    let (source, project_dir) = match config_path {
        Some(path) => {
            let path = absolutize(cwd, path);
            if !path.is_file() {
                return Err(AppError::ConfigMissing(path.display().to_string()));
            }
            let project_dir = match explicit_project {
                Some(dir) => dir,
                None => path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.to_path_buf()),
            };
            (Some(path), project_dir)
        }
        None => {
            let project_dir = explicit_project.unwrap_or_else(|| cwd.to_path_buf());
            let candidate = project_dir.join(CONFIG_FILE_NAME);
            (candidate.is_file().then_some(candidate), project_dir)
        }
    };

    let config = match &source {
        Some(path) => config::parse::parse_config_content(&fs::read_to_string(path)?)?,
        None => BundleConfig::default(),
    };

    Ok(LoadedConfig { config, project_dir, source })
}
