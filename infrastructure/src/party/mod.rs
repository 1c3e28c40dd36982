//! Party source adapters
//!
//! Implementations of [`festa_application::PartySource`].

mod config_source;
mod file_source;

pub use config_source::ConfigPartySource;
pub use file_source::FilePartySource;
