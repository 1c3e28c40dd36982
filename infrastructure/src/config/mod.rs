//! Configuration file loading for festa
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FESTA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./festa.toml` or `./.festa.toml`
//! 4. Global: `<config_dir>/festa/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig};
pub use loader::ConfigLoader;
