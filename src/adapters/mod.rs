pub mod assets;
pub mod local_filesystem;
pub mod template;
pub mod wrapper_http;

pub use assets::EmbeddedBundledWrapper;
pub use local_filesystem::LocalFilesystem;
pub use wrapper_http::HttpWrapperDownloader;
