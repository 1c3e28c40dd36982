//! Serde adapter for an optional calendar date written as `YYYY-MM-DD`
//!
//! Accepts a quoted string or a native TOML date (`date = 2024-05-10`),
//! which the toml crate hands over as a single-entry map.

use chrono::NaiveDate;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

const ISO: &str = "%Y-%m-%d";

pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.collect_str(&date.format(ISO)),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionalDateVisitor)
}

fn parse<E: de::Error>(raw: &str) -> Result<Option<NaiveDate>, E> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, ISO)
        .map(Some)
        .map_err(|_| E::custom(format!("invalid date '{}': expected YYYY-MM-DD", raw)))
}

struct OptionalDateVisitor;

impl<'de> Visitor<'de> for OptionalDateVisitor {
    type Value = Option<NaiveDate>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a date such as \"2024-05-10\"")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DateVisitor)
    }
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
    type Value = Option<NaiveDate>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a date such as \"2024-05-10\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        parse(value)
    }

    // TOML datetimes arrive as `{ "$__toml_private_datetime": "2024-05-10" }`
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        match map.next_entry::<String, String>()? {
            Some((_, raw)) => parse(&raw),
            None => Err(de::Error::custom("empty table where a date was expected")),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Day {
        #[serde(with = "super", default)]
        date: Option<NaiveDate>,
    }

    #[test]
    fn test_accepts_quoted_string() {
        let day: Day = serde_json::from_str(r#"{"date":"2024-05-10"}"#).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 5, 10));
    }

    #[test]
    fn test_accepts_native_toml_date() {
        let day: Day = toml::from_str("date = 2024-05-10").unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 5, 10));
    }

    #[test]
    fn test_toml_datetime_with_time_is_rejected() {
        let err = toml::from_str::<Day>("date = 2024-05-10T15:30:00").unwrap_err();
        assert!(err.to_string().contains("expected YYYY-MM-DD"));
    }

    #[test]
    fn test_null_and_blank_are_none() {
        let day: Day = serde_json::from_str(r#"{"date":null}"#).unwrap();
        assert_eq!(day.date, None);
        let day: Day = serde_json::from_str(r#"{"date":" "}"#).unwrap();
        assert_eq!(day.date, None);
    }

    #[test]
    fn test_error_names_expected_form() {
        let err = serde_json::from_str::<Day>(r#"{"date":"10/05/2024"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid date '10/05/2024': expected YYYY-MM-DD"));
    }

    #[test]
    fn test_serializes_iso() {
        let day = Day {
            date: NaiveDate::from_ymd_opt(2025, 1, 3),
        };
        assert_eq!(serde_json::to_string(&day).unwrap(), r#"{"date":"2025-01-03"}"#);
    }
}
