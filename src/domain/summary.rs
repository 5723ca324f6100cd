//! Outcome of a generation run.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::pipeline::PipelineStep;
use crate::domain::wrapper::ProvisionTier;

/// How the wrapper executable was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrapperReport {
    pub tier: ProvisionTier,
    pub sha256: String,
    /// Set only when the binary was downloaded.
    pub url: Option<String>,
}

/// A non-fatal problem recorded by an accumulating step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepWarning {
    pub step: PipelineStep,
    pub message: String,
}

/// Everything a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub service_id: String,
    pub executable: PathBuf,
    pub descriptor: PathBuf,
    pub jar: PathBuf,
    pub scripts: Vec<PathBuf>,
    pub log_directory: PathBuf,
    pub mirrored: Vec<PathBuf>,
    pub wrapper: WrapperReport,
    pub removed: Vec<PathBuf>,
    pub warnings: Vec<StepWarning>,
}

impl GenerationSummary {
    /// Generated files in the order they are reported to the operator.
    pub fn generated_files(&self) -> Vec<&PathBuf> {
        let mut files = vec![&self.executable, &self.descriptor, &self.jar];
        files.extend(self.scripts.iter());
        files
    }

    /// Script the operator runs to install the service.
    pub fn install_script(&self) -> Option<&PathBuf> {
        self.scripts.first()
    }
}
