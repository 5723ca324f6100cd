use std::io::Write;
use std::time::Duration;

use url::Url;

use crate::domain::AppError;

/// Fetches the wrapper binary over the network.
pub trait WrapperDownloader {
    /// Stream the body at `url` into `sink`, returning the number of bytes.
    ///
    /// Any non-success status or transport failure is an error; there is no retry.
    fn download(&self, url: &Url, timeout: Duration, sink: &mut dyn Write)
    -> Result<u64, AppError>;
}
