//! Loading of `winsw-bundle.toml` and command-line overrides.

mod load_config;
mod overrides;

pub use load_config::{LoadedConfig, load_config};
pub use overrides::ConfigOverrides;
