//! Domain layer for festa
//!
//! This crate contains the party record and the formatter that renders it.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Party**: the record describing an event's honoree, venue, schedule,
//!   optional group link, and catering/music preferences
//! - **PartyFormatter**: renders a party into the invitation and the
//!   preference sheet

pub mod config;
pub mod core;
pub mod formatter;
pub mod party;

// Re-export commonly used types
pub use config::{DocumentSelection, OutputFormat};
pub use crate::core::error::FormatError;
pub use formatter::{
    PartyFormatter,
    template::{DATE_PATTERN, GROUP_LINK_PLACEHOLDER, TIME_PATTERN},
};
pub use party::{Party, PartyBuilder};
