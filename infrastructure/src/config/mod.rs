//! Configuration file loading for bloc-supervision
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BLOC_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./bloc.toml` or `./.bloc.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/bloc-supervision/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{FileCatalogConfig, FileConfig, FileStoreConfig};
pub use loader::ConfigLoader;
