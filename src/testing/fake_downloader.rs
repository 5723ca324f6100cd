use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use url::Url;

use crate::domain::AppError;
use crate::ports::WrapperDownloader;

/// Serves a fixed body, optionally failing after writing it.
pub struct FakeDownloader {
    body: &'static [u8],
    fail: bool,
    calls: Mutex<usize>,
}

impl FakeDownloader {
    pub fn serving(body: &'static [u8]) -> Self {
        Self { body, fail: false, calls: Mutex::new(0) }
    }

    /// Writes `partial` into the sink, then reports a dropped connection.
    pub fn failing_after(partial: &'static [u8]) -> Self {
        Self { body: partial, fail: true, calls: Mutex::new(0) }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl WrapperDownloader for FakeDownloader {
    fn download(
        &self,
        url: &Url,
        _timeout: Duration,
        sink: &mut dyn Write,
    ) -> Result<u64, AppError> {
        *self.calls.lock().unwrap() += 1;
        sink.write_all(self.body)?;
        if self.fail {
            return Err(AppError::Download {
                url: url.to_string(),
                details: "connection reset".to_string(),
            });
        }
        Ok(self.body.len() as u64)
    }
}
