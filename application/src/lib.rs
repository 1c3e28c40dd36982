//! Application layer for festa
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::party_source::{InMemoryPartySource, PartySource, PartySourceError};
pub use use_cases::render_party::{
    RenderPartyError, RenderPartyInput, RenderPartyOutput, RenderPartyUseCase,
};
