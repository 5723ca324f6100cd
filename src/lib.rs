//! winsw-bundle: package a Java application jar as a WinSW Windows service bundle.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{BundleOptions, clean, generate, wrapper_url};
pub use app::config::ConfigOverrides;
pub use domain::{AppError, GenerationSummary, PipelinePolicy};
