//! Infrastructure layer for festa
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod party;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig};
pub use party::{ConfigPartySource, FilePartySource};
