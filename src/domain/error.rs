use std::io;

use thiserror::Error;

use super::pipeline::PipelineStep;

/// Library-wide error type for winsw-bundle operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file missing at the expected location.
    #[error("Bundle config not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Service identifier is invalid.
    #[error(
        "Invalid service identifier '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidServiceId(String),

    /// The application jar has not been built yet.
    #[error("Source JAR file not found: {path}. Please build the project first with 'mvn package'")]
    JarNotFound { path: String },

    /// A stale artifact could not be removed.
    #[error("Failed to remove previous artifact {path}: {source}")]
    Cleanup {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The embedded wrapper binary could not be materialized.
    #[error("Failed to copy bundled wrapper to {path}: {details}")]
    BundledWrapper { path: String, details: String },

    /// Wrapper download failed (network, HTTP status, or stream write).
    #[error("Failed to download wrapper from {url}: {details}")]
    Download { url: String, details: String },

    /// Downloaded or bundled wrapper does not match the pinned digest.
    #[error("Wrapper checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// File copy failed.
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRenderError { template: String, reason: String },

    /// Output serialization failed.
    #[error("Failed to serialize {what}: {details}")]
    Serialization { what: String, details: String },

    /// A pipeline step failed; wraps the causing error.
    #[error("Failed to generate service bundle ({step}): {source}")]
    Generation {
        step: PipelineStep,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Wrap this error as the failure of a pipeline step.
    pub fn in_step(self, step: PipelineStep) -> Self {
        match self {
            already @ AppError::Generation { .. } => already,
            other => AppError::Generation { step, source: Box::new(other) },
        }
    }

    /// The innermost cause when this is a wrapped pipeline failure.
    pub fn root_cause(&self) -> &AppError {
        match self {
            AppError::Generation { source, .. } => source.root_cause(),
            other => other,
        }
    }

}
