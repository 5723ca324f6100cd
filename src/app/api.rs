//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use tracing::info;
use url::Url;

use crate::adapters::{EmbeddedBundledWrapper, HttpWrapperDownloader, LocalFilesystem};
use crate::app::AppContext;
use crate::app::commands::{clean, generate};
use crate::app::config::{ConfigOverrides, load_config};
use crate::domain::wrapper;
use crate::domain::{GenerationRequest, PipelinePolicy, PipelineStep, ResolvedLayout};

pub use crate::app::config::LoadedConfig;
pub use crate::domain::{AppError, GenerationSummary};

/// Where to find the configuration and what to override in it.
#[derive(Debug, Clone, Default)]
pub struct BundleOptions {
    pub config_path: Option<PathBuf>,
    pub project_dir: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

fn create_context()
-> Result<AppContext<LocalFilesystem, HttpWrapperDownloader, EmbeddedBundledWrapper>, AppError> {
    Ok(AppContext::new(
        LocalFilesystem::new(),
        HttpWrapperDownloader::new()?,
        EmbeddedBundledWrapper::new(),
    ))
}

fn build_request(cwd: &Path, options: &BundleOptions) -> Result<GenerationRequest, AppError> {
    let LoadedConfig { mut config, project_dir, source } =
        load_config(cwd, options.config_path.as_deref(), options.project_dir.as_deref())?;
    match &source {
        Some(path) => info!(config = %path.display(), "Using bundle config"),
        None => info!(project = %project_dir.display(), "No bundle config file, using defaults"),
    }
    options.overrides.apply(&mut config);
    GenerationRequest::from_config(&config, &project_dir)
}

/// Generate the service bundle described by `options`.
pub fn generate(
    options: &BundleOptions,
    policy: &PipelinePolicy,
) -> Result<GenerationSummary, AppError> {
    let cwd = std::env::current_dir()?;
    let request =
        build_request(&cwd, options).map_err(|err| err.in_step(PipelineStep::ResolvePaths))?;
    let ctx = create_context()?;
    generate::execute(&ctx, &request, policy)
}

/// Remove artifacts of a previous run without generating anything.
pub fn clean(options: &BundleOptions) -> Result<Vec<PathBuf>, AppError> {
    let cwd = std::env::current_dir()?;
    let request = build_request(&cwd, options)?;
    let layout = ResolvedLayout::resolve(&request)?;
    clean::execute(&LocalFilesystem::new(), &layout)
}

/// Release download URL of the wrapper for `version`.
pub fn wrapper_url(version: &str) -> Result<Url, AppError> {
    wrapper::download_url(version)
}
