//! Wrapper binary (WinSW) acquisition model.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use sha2::{Digest, Sha256};
use url::Url;

use crate::domain::AppError;
use crate::domain::config::WrapperConfig;

/// WinSW release used when no version is configured.
pub const DEFAULT_WRAPPER_VERSION: &str = "2.12.0";

/// Release asset name of the .NET 4 WinSW build.
pub const WRAPPER_ASSET_NAME: &str = "WinSW.NET4.exe";

const RELEASE_DOWNLOAD_BASE: &str = "https://github.com/winsw/winsw/releases/download";

/// Release download URL for a WinSW version.
pub fn download_url(version: &str) -> Result<Url, AppError> {
    let version = version.trim().trim_start_matches('v');
    if version.is_empty() || version.contains(['/', '\\', '?', '#']) {
        return Err(AppError::config_error(format!("Invalid wrapper version '{}'", version)));
    }
    let raw = format!("{}/v{}/{}", RELEASE_DOWNLOAD_BASE, version, WRAPPER_ASSET_NAME);
    Url::parse(&raw)
        .map_err(|e| AppError::config_error(format!("Invalid wrapper download URL {}: {}", raw, e)))
}

/// Validate a hex SHA-256 digest and return it lowercased.
pub fn normalize_sha256(digest: &str) -> Result<String, AppError> {
    let digest = digest.trim().to_ascii_lowercase();
    if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::config_error(format!(
            "wrapper.sha256 must be 64 hex characters, got '{}'",
            digest
        )));
    }
    Ok(digest)
}

/// Hex SHA-256 of a byte slice.
pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex_digest(hasher)
}

pub(crate) fn hex_digest(hasher: Sha256) -> String {
    hasher.finalize().iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Where the wrapper is fetched from when it is not bundled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperSource {
    pub url: Url,
    pub sha256: Option<String>,
    pub timeout: Duration,
}

impl WrapperSource {
    /// Resolve the effective source; an explicit URL wins over the version.
    pub fn from_config(config: &WrapperConfig) -> Result<Self, AppError> {
        let url = match &config.download_url {
            Some(url) => url.clone(),
            None => download_url(&config.version)?,
        };
        let sha256 = match config.sha256.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(digest) => Some(normalize_sha256(digest)?),
            None => None,
        };
        Ok(Self { url, sha256, timeout: Duration::from_secs(config.timeout_secs) })
    }

    /// Check a computed digest against the pinned one, if any.
    pub fn verify(&self, actual: &str) -> Result<(), AppError> {
        match &self.sha256 {
            Some(expected) if expected != actual => Err(AppError::ChecksumMismatch {
                expected: expected.clone(),
                actual: actual.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Which tier produced the wrapper executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionTier {
    /// A file was already present and kept as-is.
    Existing,
    /// Copied from the binary embedded in this tool.
    Bundled,
    /// Fetched over HTTP(S).
    Downloaded,
}

impl fmt::Display for ProvisionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProvisionTier::Existing => "existing",
            ProvisionTier::Bundled => "bundled",
            ProvisionTier::Downloaded => "downloaded",
        };
        f.write_str(label)
    }
}
