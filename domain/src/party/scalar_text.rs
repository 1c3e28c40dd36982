//! Deserialize free text that may arrive as a bare scalar
//!
//! Environment-based config parses `FESTA_PARTY__HOST_NAME=2024` as a
//! number; such values are kept as their textual form.

use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TextVisitor)
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("text, a number, or a boolean")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(value)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Venue {
        #[serde(deserialize_with = "super::deserialize")]
        name: String,
    }

    #[test]
    fn test_keeps_text() {
        let venue: Venue = serde_json::from_str(r#"{"name":"Salão X"}"#).unwrap();
        assert_eq!(venue.name, "Salão X");
    }

    #[test]
    fn test_numbers_become_text() {
        let venue: Venue = serde_json::from_str(r#"{"name":2024}"#).unwrap();
        assert_eq!(venue.name, "2024");
        let venue: Venue = serde_json::from_str(r#"{"name":-7}"#).unwrap();
        assert_eq!(venue.name, "-7");
    }

    #[test]
    fn test_lists_are_rejected() {
        let err = serde_json::from_str::<Venue>(r#"{"name":["a"]}"#).unwrap_err();
        assert!(err.to_string().contains("text, a number, or a boolean"));
    }
}
