//! Party source port.
//!
//! Defines where a [`Party`] comes from. Infrastructure adapters implement
//! this to read parties from config sections or party files.

use festa_domain::Party;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a party.
#[derive(Error, Debug)]
pub enum PartySourceError {
    #[error("Failed to read party file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse party from {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("Unsupported party file format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// Port for obtaining the party to render.
pub trait PartySource: Send + Sync {
    /// Load the party record.
    fn load(&self) -> Result<Party, PartySourceError>;

    /// Short human-readable description of where the party comes from.
    fn describe(&self) -> String;
}

/// Party source holding an already-built party.
#[derive(Debug, Clone)]
pub struct InMemoryPartySource {
    party: Party,
}

impl InMemoryPartySource {
    pub fn new(party: Party) -> Self {
        Self { party }
    }
}

impl PartySource for InMemoryPartySource {
    fn load(&self) -> Result<Party, PartySourceError> {
        Ok(self.party.clone())
    }

    fn describe(&self) -> String {
        "in-memory party".to_string()
    }
}
