//! Wrapper download client implementation using reqwest.

use std::io::{self, Write};
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::WrapperDownloader;

const USER_AGENT: &str = concat!("winsw-bundle/", env!("CARGO_PKG_VERSION"));

/// HTTP client for fetching release assets.
#[derive(Debug, Clone)]
pub struct HttpWrapperDownloader {
    client: Client,
}

impl HttpWrapperDownloader {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

fn download_error(url: &Url, details: impl std::fmt::Display) -> AppError {
    AppError::Download { url: url.to_string(), details: details.to_string() }
}

impl WrapperDownloader for HttpWrapperDownloader {
    fn download(
        &self,
        url: &Url,
        timeout: Duration,
        sink: &mut dyn Write,
    ) -> Result<u64, AppError> {
        let mut response = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .map_err(|e| download_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(download_error(url, format!("HTTP {}", status)));
        }

        io::copy(&mut response, sink).map_err(|e| download_error(url, e))
    }
}
