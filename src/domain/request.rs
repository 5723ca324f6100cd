//! Immutable input of one generation run.

use std::path::{Path, PathBuf};

use crate::domain::config::BundleConfig;
use crate::domain::identifiers::ServiceId;
use crate::domain::wrapper::WrapperSource;
use crate::domain::AppError;

/// Everything a generation run needs, validated once up front.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub service_id: ServiceId,
    pub service_name: String,
    pub service_description: String,
    pub java_path: String,
    pub jvm_options: Option<String>,
    pub app_args: Option<String>,
    /// Built jar, as configured (relative to `project_dir` when not absolute).
    pub jar_source: PathBuf,
    pub output_dir: PathBuf,
    pub jar_output_dir: PathBuf,
    /// Raw log path; may contain `%BASE%`.
    pub log_path: String,
    pub wrapper: WrapperSource,
    pub additional_directories: Vec<String>,
    /// Base for every relative path above.
    pub project_dir: PathBuf,
}

impl GenerationRequest {
    /// Build a request from a validated configuration.
    pub fn from_config(config: &BundleConfig, project_dir: &Path) -> Result<Self, AppError> {
        config.validate()?;

        let jar_path = non_empty(config.layout.jar_path.as_deref()).ok_or_else(|| {
            AppError::config_error("layout.jar_path is required (path to the built application jar)")
        })?;
        let jar_source = PathBuf::from(jar_path);
        let jar_stem = jar_source.file_stem().and_then(|s| s.to_str()).ok_or_else(|| {
            AppError::config_error(format!("layout.jar_path has no file name: {}", jar_path))
        })?;

        let service_id = resolve_service_id(config, jar_stem)?;
        let service_name = non_empty(config.service.name.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| service_id.to_string());
        let service_description =
            non_empty(config.service.description.as_deref()).unwrap_or_default().to_string();

        Ok(Self {
            service_id,
            service_name,
            service_description,
            java_path: config.java.path.trim().to_string(),
            jvm_options: non_empty(config.java.jvm_options.as_deref()).map(str::to_string),
            app_args: non_empty(config.java.app_args.as_deref()).map(str::to_string),
            jar_source,
            output_dir: PathBuf::from(&config.layout.output_dir),
            jar_output_dir: PathBuf::from(&config.layout.jar_output_dir),
            log_path: config.layout.log_path.clone(),
            wrapper: WrapperSource::from_config(&config.wrapper)?,
            additional_directories: config.layout.additional_directories.clone(),
            project_dir: project_dir.to_path_buf(),
        })
    }

    /// File name of the application jar.
    pub fn jar_file_name(&self) -> String {
        self.jar_source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

fn resolve_service_id(config: &BundleConfig, jar_stem: &str) -> Result<ServiceId, AppError> {
    let raw = non_empty(config.service.project_name.as_deref())
        .or_else(|| non_empty(config.service.id.as_deref()))
        .unwrap_or(jar_stem);
    ServiceId::new(raw.trim())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
