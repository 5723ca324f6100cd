use crate::ports::{BundledWrapper, DeploymentFilesystem, WrapperDownloader};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: DeploymentFilesystem, D: WrapperDownloader, B: BundledWrapper> {
    filesystem: F,
    downloader: D,
    bundled: B,
}

impl<F: DeploymentFilesystem, D: WrapperDownloader, B: BundledWrapper> AppContext<F, D, B> {
    /// Create a new application context.
    pub fn new(filesystem: F, downloader: D, bundled: B) -> Self {
        Self { filesystem, downloader, bundled }
    }

    /// Get a reference to the deployment filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the wrapper downloader.
    pub fn downloader(&self) -> &D {
        &self.downloader
    }

    /// Get a reference to the bundled wrapper source.
    pub fn bundled(&self) -> &B {
        &self.bundled
    }
}
