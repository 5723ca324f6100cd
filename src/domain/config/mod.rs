//! Bundle configuration (`winsw-bundle.toml`) model and parsing.

mod bundle_config;
pub mod parse;

pub use bundle_config::{BundleConfig, JavaConfig, LayoutConfig, ServiceConfig, WrapperConfig};

/// Default configuration file name looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "winsw-bundle.toml";
