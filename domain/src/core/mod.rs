//! Core domain concepts shared across all subdomains.
//!
//! - [`error::FormatError`]: rendering failures for party text

pub mod error;
