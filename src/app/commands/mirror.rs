//! Recursive copy of additional resource directories into the deployment root.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::domain::{AppError, FailurePolicy, MirrorTarget, PipelineStep, StepWarning};
use crate::ports::DeploymentFilesystem;

/// Directories copied and problems recorded along the way.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MirrorOutcome {
    pub mirrored: Vec<PathBuf>,
    pub warnings: Vec<StepWarning>,
}

impl MirrorOutcome {
    fn record(&mut self, policy: FailurePolicy, err: AppError) -> Result<(), AppError> {
        match policy {
            FailurePolicy::FailFast => Err(err),
            FailurePolicy::Accumulate => {
                warn!("{}", err);
                self.push_warning(err.to_string());
                Ok(())
            }
        }
    }

    fn push_warning(&mut self, message: String) {
        self.warnings.push(StepWarning { step: PipelineStep::MirrorDirectories, message });
    }
}

/// Mirror every target whose source directory exists.
///
/// A missing source is always a warning. Copy failures follow `policy`.
pub fn execute<F: DeploymentFilesystem>(
    filesystem: &F,
    targets: &[MirrorTarget],
    policy: FailurePolicy,
) -> Result<MirrorOutcome, AppError> {
    let mut outcome = MirrorOutcome::default();

    for target in targets {
        if !filesystem.is_dir(&target.source) {
            let message = format!(
                "Additional directory '{}' not found at {}, skipping",
                target.name,
                target.source.display()
            );
            warn!("{}", message);
            outcome.push_warning(message);
            continue;
        }

        if filesystem.same_file(&target.source, &target.target) {
            info!(
                directory = %target.name,
                path = %target.source.display(),
                "Additional directory already in deployment root, nothing to copy"
            );
            outcome.mirrored.push(target.target.clone());
            continue;
        }

        if let Err(err) = filesystem.create_dir_all(&target.target) {
            outcome.record(policy, err)?;
            continue;
        }

        let mut copied = 0usize;
        for entry in filesystem.walk_tree(&target.source) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    outcome.record(policy, err)?;
                    continue;
                }
            };
            let from = target.source.join(&entry.relative);
            let to = target.target.join(&entry.relative);
            let result = if entry.is_dir {
                filesystem.create_dir_all(&to)
            } else {
                filesystem.copy_file(&from, &to).map(|()| copied += 1)
            };
            match result {
                Ok(()) => debug!(from = %from.display(), to = %to.display(), "Mirrored entry"),
                Err(err) => outcome.record(policy, err)?,
            }
        }

        info!(
            directory = %target.name,
            files = copied,
            to = %target.target.display(),
            "Mirrored additional directory"
        );
        outcome.mirrored.push(target.target.clone());
    }

    Ok(outcome)
}
