//! Domain error types

use thiserror::Error;

/// Errors raised when a party value cannot be rendered into its text pattern
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Party date is missing; cannot render it as DD/MM/YYYY")]
    MissingDate,

    #[error("Party time is missing; cannot render it as HH:MM")]
    MissingTime,

    #[error("Failed to render party text: {0}")]
    Render(#[from] std::fmt::Error),
}

impl FormatError {
    /// Check if this error comes from an absent input value
    pub fn is_missing_value(&self) -> bool {
        matches!(self, FormatError::MissingDate | FormatError::MissingTime)
    }
}
