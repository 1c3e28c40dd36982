//! Party entity

use super::builder::PartyBuilder;
use super::{calendar_date, clock_time, scalar_text};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A party record: who is celebrated, where, when, and what to serve and play
///
/// The record is built by collaborators (see [`PartyBuilder`]) and consumed
/// read-only by [`PartyFormatter`](crate::PartyFormatter). Required fields are
/// not enforced here; use [`Party::missing_fields`] to check before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    /// Name of the person whose birthday is celebrated
    #[serde(deserialize_with = "scalar_text::deserialize")]
    pub host_name: String,
    /// Venue description
    #[serde(deserialize_with = "scalar_text::deserialize")]
    pub location: String,
    /// Calendar date of the party (`YYYY-MM-DD`, quoted or as a TOML date)
    #[serde(with = "calendar_date")]
    pub date: Option<NaiveDate>,
    /// Start time (`HH:MM` or `HH:MM:SS` in config files)
    #[serde(with = "clock_time")]
    pub time: Option<NaiveTime>,
    /// Link to the guests' chat group, if any
    pub group_link: Option<String>,
    /// Buffet items, in serving order
    pub buffet_items: Vec<String>,
    /// Music styles, in preference order
    pub music_styles: Vec<String>,
}

impl Party {
    /// Start building a party
    pub fn builder() -> PartyBuilder {
        PartyBuilder::new()
    }

    /// Names of required fields that are absent or blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.host_name.trim().is_empty() {
            missing.push("host_name");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.time.is_none() {
            missing.push("time");
        }
        missing
    }

    /// The group link, treating an empty string as absent
    pub fn group_link(&self) -> Option<&str> {
        self.group_link.as_deref().filter(|link| !link.is_empty())
    }
}
