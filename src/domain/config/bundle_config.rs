//! Bundle configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::identifiers::validation::validate_relative_dir;
use crate::domain::wrapper::{DEFAULT_WRAPPER_VERSION, normalize_sha256};

/// Configuration for bundle generation loaded from `winsw-bundle.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleConfig {
    /// Service identity.
    #[serde(default)]
    pub service: ServiceConfig,
    /// Output layout.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Java launcher configuration.
    #[serde(default)]
    pub java: JavaConfig,
    /// Wrapper binary acquisition.
    #[serde(default)]
    pub wrapper: WrapperConfig,
}

impl BundleConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.layout.validate()?;
        self.java.validate()?;
        self.wrapper.validate()?;
        Ok(())
    }
}

/// Service identity fields written into the descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Service id; falls back to the jar file stem.
    pub id: Option<String>,
    /// Overrides `id` when set.
    pub project_name: Option<String>,
    /// Display name; falls back to the service id.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

/// Filesystem layout of the generated bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Directory receiving the wrapper, descriptor, and scripts.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Directory receiving the application jar.
    #[serde(default = "default_jar_output_dir")]
    pub jar_output_dir: String,
    /// Log directory; may contain the `%BASE%` token.
    #[serde(default = "default_log_path")]
    pub log_path: String,
    /// Built application jar.
    pub jar_path: Option<String>,
    /// Project-relative directories mirrored next to the jar.
    #[serde(default)]
    pub additional_directories: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            jar_output_dir: default_jar_output_dir(),
            log_path: default_log_path(),
            jar_path: None,
            additional_directories: Vec::new(),
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.output_dir.trim().is_empty() {
            return Err(AppError::config_error("layout.output_dir must not be empty"));
        }
        if self.jar_output_dir.trim().is_empty() {
            return Err(AppError::config_error("layout.jar_output_dir must not be empty"));
        }
        if self.log_path.trim().is_empty() {
            return Err(AppError::config_error("layout.log_path must not be empty"));
        }
        if let Some(name) = self.additional_directories.iter().find(|d| !validate_relative_dir(d)) {
            return Err(AppError::config_error(format!(
                "Invalid additional directory '{}': must be relative to the project directory",
                name
            )));
        }
        Ok(())
    }
}

fn default_output_dir() -> String {
    "target/bin".to_string()
}

fn default_jar_output_dir() -> String {
    "target".to_string()
}

fn default_log_path() -> String {
    "%BASE%\\..\\logs\\out".to_string()
}

/// Java launcher settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JavaConfig {
    /// Java executable invoked by the wrapper.
    #[serde(default = "default_java_path")]
    pub path: String,
    /// Extra JVM options placed before the baseline flags.
    pub jvm_options: Option<String>,
    /// Extra application arguments placed after the jar.
    pub app_args: Option<String>,
}

impl Default for JavaConfig {
    fn default() -> Self {
        Self { path: default_java_path(), jvm_options: None, app_args: None }
    }
}

impl JavaConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.trim().is_empty() {
            return Err(AppError::config_error("java.path must not be empty"));
        }
        Ok(())
    }
}

fn default_java_path() -> String {
    "java".to_string()
}

/// Wrapper binary acquisition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WrapperConfig {
    /// WinSW release used to compute the download URL.
    #[serde(default = "default_wrapper_version")]
    pub version: String,
    /// Explicit download URL; replaces the computed one.
    pub download_url: Option<Url>,
    /// Expected SHA-256 of the wrapper binary.
    pub sha256: Option<String>,
    /// Download timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            version: default_wrapper_version(),
            download_url: None,
            sha256: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WrapperConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.version.trim().is_empty() && self.download_url.is_none() {
            return Err(AppError::config_error(
                "wrapper.version must not be empty when wrapper.download_url is not set",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("wrapper.timeout_secs must be greater than 0"));
        }
        if let Some(url) = &self.download_url
            && !matches!(url.scheme(), "http" | "https")
        {
            return Err(AppError::config_error(format!(
                "wrapper.download_url must be http(s): {}",
                url
            )));
        }
        if let Some(digest) = self.sha256.as_deref().filter(|d| !d.trim().is_empty()) {
            normalize_sha256(digest)?;
        }
        Ok(())
    }
}

fn default_wrapper_version() -> String {
    DEFAULT_WRAPPER_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    300
}
