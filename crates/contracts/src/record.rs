use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Record identifier as issued by the data source.
///
/// Backends disagree on the wire type (sequential integers, UUID strings);
/// the browser treats all of them as opaque strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct RecordIdVisitor;

impl<'de> Visitor<'de> for RecordIdVisitor {
    type Value = RecordId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or integer id")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(RecordId(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(RecordId(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(RecordId(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RecordIdVisitor)
    }
}

/// The two fields the browser is allowed to know about any record.
///
/// Everything else on a record is domain payload that only the screen's own
/// column renderers and form touch.
pub trait ResourceRecord {
    fn id(&self) -> &str;
    fn archived(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_accepts_strings_and_integers() {
        let from_str: RecordId = serde_json::from_str("\"abc-1\"").unwrap();
        assert_eq!(from_str.as_str(), "abc-1");

        let from_int: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(from_int.as_str(), "42");

        let from_neg: RecordId = serde_json::from_str("-7").unwrap();
        assert_eq!(from_neg.as_str(), "-7");
    }

    #[test]
    fn record_id_serializes_as_string() {
        let id = RecordId::new("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
