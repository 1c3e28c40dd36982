//! Serde adapter for an optional time of day written as `HH:MM`
//!
//! Accepts `HH:MM:SS` on input as well, so values written by other tools
//! still load.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

const SHORT: &str = "%H:%M";
const LONG: &str = "%H:%M:%S";

pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(time) => serializer.collect_str(&time.format(SHORT)),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveTime::parse_from_str(s, SHORT)
            .or_else(|_| NaiveTime::parse_from_str(s, LONG))
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid time '{}': {}", s, e))),
    }
}
