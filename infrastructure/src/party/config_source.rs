//! Party source backed by the `[party]` config section

use crate::config::FileConfig;
use festa_application::{PartySource, PartySourceError};
use festa_domain::Party;

/// Serves the party declared in the merged configuration
#[derive(Debug, Clone)]
pub struct ConfigPartySource {
    party: Party,
}

impl ConfigPartySource {
    pub fn new(party: Party) -> Self {
        Self { party }
    }

    pub fn from_config(config: &FileConfig) -> Self {
        Self::new(config.party.clone())
    }
}

impl PartySource for ConfigPartySource {
    fn load(&self) -> Result<Party, PartySourceError> {
        Ok(self.party.clone())
    }

    fn describe(&self) -> String {
        "config section [party]".to_string()
    }
}
