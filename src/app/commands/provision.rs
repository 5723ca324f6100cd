//! Wrapper executable provisioning: existing file, bundled copy, or download.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, ProvisionTier, WrapperReport, WrapperSource};
use crate::ports::{BundledWrapper, DeploymentFilesystem, WrapperDownloader};

/// Make sure a wrapper executable exists at `executable`.
///
/// A present file is kept as is. Otherwise the bundled binary is used when
/// one was embedded, else the binary is downloaded. Both copies are written
/// all-or-nothing and checked against the pinned digest when one is set.
pub fn execute<F, D, B>(
    ctx: &AppContext<F, D, B>,
    executable: &Path,
    source: &WrapperSource,
) -> Result<WrapperReport, AppError>
where
    F: DeploymentFilesystem,
    D: WrapperDownloader,
    B: BundledWrapper,
{
    let filesystem = ctx.filesystem();

    if filesystem.exists(executable) {
        let sha256 = filesystem.sha256(executable)?;
        info!(path = %executable.display(), "Wrapper already present, keeping it");
        return Ok(WrapperReport { tier: ProvisionTier::Existing, sha256, url: None });
    }

    let accept = |actual: &str| source.verify(actual);

    let report = match ctx.bundled().wrapper_binary() {
        Some(bytes) => {
            let sha256 = filesystem.write_atomic(
                executable,
                &mut |sink: &mut dyn Write| {
                    sink.write_all(bytes).map_err(|err| AppError::BundledWrapper {
                        path: executable.display().to_string(),
                        details: err.to_string(),
                    })
                },
                &accept,
            )?;
            info!(path = %executable.display(), "Copied bundled wrapper");
            WrapperReport { tier: ProvisionTier::Bundled, sha256, url: None }
        }
        None => {
            info!(url = %source.url, "Downloading wrapper");
            let sha256 = filesystem.write_atomic(
                executable,
                &mut |sink: &mut dyn Write| {
                    ctx.downloader().download(&source.url, source.timeout, sink).map(|_| ())
                },
                &accept,
            )?;
            info!(path = %executable.display(), "Downloaded wrapper");
            WrapperReport {
                tier: ProvisionTier::Downloaded,
                sha256,
                url: Some(source.url.to_string()),
            }
        }
    };

    filesystem.set_executable(executable)?;
    Ok(report)
}
