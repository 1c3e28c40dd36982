//! Which party documents to render

use serde::{Deserialize, Serialize};

/// Selection of documents to render for a party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSelection {
    /// Only the invitation
    Invitation,
    /// Only the buffet/music preference sheet
    Preferences,
    /// Invitation followed by preferences (default)
    #[default]
    All,
}

impl DocumentSelection {
    pub fn includes_invitation(&self) -> bool {
        matches!(self, Self::Invitation | Self::All)
    }

    pub fn includes_preferences(&self) -> bool {
        matches!(self, Self::Preferences | Self::All)
    }
}
