//! Presentation layer for festa
//!
//! This crate contains the CLI definition and console output formatting.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Documents, OutputFormat};
pub use output::console::ConsoleFormatter;
