mod fake_downloader;
mod faulty_filesystem;
mod fixtures;
mod static_bundled_wrapper;

pub use fake_downloader::FakeDownloader;
pub use faulty_filesystem::FaultyFilesystem;
pub use fixtures::{layout_in, request_in};
pub use static_bundled_wrapper::{NoBundledWrapper, StaticBundledWrapper};
