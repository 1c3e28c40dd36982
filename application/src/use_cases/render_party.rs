//! Render Party use case.
//!
//! Loads a party through a [`PartySource`] and renders the selected
//! documents with [`PartyFormatter`].

use crate::ports::party_source::{PartySource, PartySourceError};
use festa_domain::{DocumentSelection, FormatError, PartyFormatter};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while rendering a party.
#[derive(Error, Debug)]
pub enum RenderPartyError {
    #[error("Party source error: {0}")]
    Source(#[from] PartySourceError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

/// Input for the [`RenderPartyUseCase`].
#[derive(Debug, Clone, Default)]
pub struct RenderPartyInput {
    /// Which documents to render.
    pub documents: DocumentSelection,
}

impl RenderPartyInput {
    pub fn new(documents: DocumentSelection) -> Self {
        Self { documents }
    }
}

/// Rendered documents for one party.
///
/// A document is `None` when it was not selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPartyOutput {
    pub host_name: String,
    pub invitation: Option<String>,
    pub preferences: Option<String>,
}

/// Use case for rendering a party's invitation and preference sheet.
pub struct RenderPartyUseCase {
    source: Arc<dyn PartySource>,
}

impl Clone for RenderPartyUseCase {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl RenderPartyUseCase {
    pub fn new(source: Arc<dyn PartySource>) -> Self {
        Self { source }
    }

    /// Load the party and render the selected documents.
    ///
    /// Missing required fields are logged, not rejected: the formatter
    /// reports absent date/time itself and renders blank text verbatim.
    pub fn execute(&self, input: RenderPartyInput) -> Result<RenderPartyOutput, RenderPartyError> {
        info!("Loading party from {}", self.source.describe());
        let party = self.source.load()?;

        let missing = party.missing_fields();
        if !missing.is_empty() {
            warn!(
                "Party for '{}' is missing required fields: {}",
                party.host_name,
                missing.join(", ")
            );
        }

        let invitation = if input.documents.includes_invitation() {
            debug!("Rendering invitation");
            Some(PartyFormatter::render_invitation(&party)?)
        } else {
            None
        };

        let preferences = if input.documents.includes_preferences() {
            debug!(
                buffet_items = party.buffet_items.len(),
                music_styles = party.music_styles.len(),
                "Rendering preferences"
            );
            Some(PartyFormatter::render_preferences(&party))
        } else {
            None
        };

        Ok(RenderPartyOutput {
            host_name: party.host_name,
            invitation,
            preferences,
        })
    }
}
