//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod document_selection;
mod output_format;

pub use document_selection::DocumentSelection;
pub use output_format::OutputFormat;
