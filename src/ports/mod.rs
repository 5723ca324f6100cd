mod bundled_wrapper;
mod deployment_filesystem;
mod wrapper_downloader;

pub use bundled_wrapper::BundledWrapper;
pub use deployment_filesystem::{DeploymentFilesystem, TreeEntry};
pub use wrapper_downloader::WrapperDownloader;
