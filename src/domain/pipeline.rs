//! Pipeline step identities and per-step failure policy.

use std::fmt;

use serde::Serialize;

/// One stage of the bundle generation pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStep {
    ResolvePaths,
    Clean,
    CreateDirectories,
    ProvisionWrapper,
    VerifyJar,
    CopyJar,
    MirrorDirectories,
    CreateLogDirectory,
    WriteDescriptor,
    WriteScripts,
}

impl PipelineStep {
    pub const ALL: [PipelineStep; 10] = [
        PipelineStep::ResolvePaths,
        PipelineStep::Clean,
        PipelineStep::CreateDirectories,
        PipelineStep::ProvisionWrapper,
        PipelineStep::VerifyJar,
        PipelineStep::CopyJar,
        PipelineStep::MirrorDirectories,
        PipelineStep::CreateLogDirectory,
        PipelineStep::WriteDescriptor,
        PipelineStep::WriteScripts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PipelineStep::ResolvePaths => "resolve paths",
            PipelineStep::Clean => "clean previous artifacts",
            PipelineStep::CreateDirectories => "create directories",
            PipelineStep::ProvisionWrapper => "provision wrapper",
            PipelineStep::VerifyJar => "verify jar source",
            PipelineStep::CopyJar => "copy jar",
            PipelineStep::MirrorDirectories => "mirror additional directories",
            PipelineStep::CreateLogDirectory => "create log directory",
            PipelineStep::WriteDescriptor => "write service descriptor",
            PipelineStep::WriteScripts => "write lifecycle scripts",
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a step reacts to its own failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// The first failure aborts the whole run.
    FailFast,
    /// Failures are recorded as warnings and the step keeps going.
    Accumulate,
}

/// Failure policy for every pipeline step.
///
/// Only steps that can make progress past a partial failure honor
/// `Accumulate`; for the others the distinction is moot because they either
/// succeed or have nothing left to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePolicy {
    mirror: FailurePolicy,
}

impl Default for PipelinePolicy {
    fn default() -> Self {
        Self { mirror: FailurePolicy::Accumulate }
    }
}

impl PipelinePolicy {
    /// Fail-fast for every step, mirroring included.
    pub fn strict() -> Self {
        Self { mirror: FailurePolicy::FailFast }
    }

    pub fn for_step(&self, step: PipelineStep) -> FailurePolicy {
        match step {
            PipelineStep::MirrorDirectories => self.mirror,
            _ => FailurePolicy::FailFast,
        }
    }
}
