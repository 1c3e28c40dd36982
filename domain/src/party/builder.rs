//! Step-by-step construction of a [`Party`]

use super::entities::Party;
use chrono::{NaiveDate, NaiveTime};

/// Builder for [`Party`]
///
/// Setters can be chained in any order. [`build`](Self::build) never fails:
/// required fields are the caller's responsibility, see
/// [`Party::missing_fields`].
#[derive(Debug, Clone, Default)]
pub struct PartyBuilder {
    party: Party,
}

impl PartyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host_name(mut self, host_name: impl Into<String>) -> Self {
        self.party.host_name = host_name.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.party.location = location.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.party.date = Some(date);
        self
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.party.time = Some(time);
        self
    }

    pub fn group_link(mut self, link: impl Into<String>) -> Self {
        self.party.group_link = Some(link.into());
        self
    }

    /// Append one buffet item
    pub fn buffet_item(mut self, item: impl Into<String>) -> Self {
        self.party.buffet_items.push(item.into());
        self
    }

    /// Replace the buffet list
    pub fn buffet_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.party.buffet_items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Append one music style
    pub fn music_style(mut self, style: impl Into<String>) -> Self {
        self.party.music_styles.push(style.into());
        self
    }

    /// Replace the music style list
    pub fn music_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.party.music_styles = styles.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Party {
        self.party
    }
}
