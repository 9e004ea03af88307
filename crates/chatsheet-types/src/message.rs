use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::cmp::Ordering;

// NOTE: Raw message leniency
//
// Exported logs come from a third-party service and are not validated upstream.
// Every field is optional and read best-effort:
// - `sender`: only JSON strings count, anything else reads as absent
// - `timestamp`: ISO-8601 text or a numeric epoch; anything else reads as absent
// - `content`: kept as the raw JSON value; a missing key reads as ""
// - non-object entries in a session list become a message with no fields

/// One message record exactly as the log service returned it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    pub content: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

/// A timestamp as the service sent it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Text(String),
    Epoch(Number),
}

impl Timestamp {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Timestamp::Text(text.clone())),
            Value::Number(number) => Some(Timestamp::Epoch(number.clone())),
            _ => None,
        }
    }
}

/// Ordering key of a message
///
/// Missing (or empty) timestamps sort first, then epochs by numeric value,
/// then text lexicographically.
#[derive(Debug, Clone, Copy)]
pub enum SortKey<'a> {
    Missing,
    Epoch(f64),
    Text(&'a str),
}

impl SortKey<'_> {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Missing => 0,
            SortKey::Epoch(_) => 1,
            SortKey::Text(_) => 2,
        }
    }
}

impl Ord for SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Epoch(a), SortKey::Epoch(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey<'_> {}

impl RawMessage {
    pub fn new(sender: Option<&str>, content: impl Into<Value>, timestamp: Option<&str>) -> Self {
        Self {
            sender: sender.map(str::to_string),
            content: content.into(),
            timestamp: timestamp.map(|t| Timestamp::Text(t.to_string())),
        }
    }

    /// Read a message out of an arbitrary JSON value without failing
    pub fn from_value(value: &Value) -> Self {
        Self {
            sender: value.get("sender").and_then(Value::as_str).map(str::to_string),
            content: value
                .get("content")
                .cloned()
                .unwrap_or_else(|| Value::String(String::new())),
            timestamp: value.get("timestamp").and_then(Timestamp::from_value),
        }
    }

    /// Sender label, or None when it is missing or empty
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref().filter(|s| !s.is_empty())
    }

    /// Key used for temporal ordering; a missing timestamp sorts first
    pub fn sort_key(&self) -> SortKey<'_> {
        match &self.timestamp {
            None => SortKey::Missing,
            Some(Timestamp::Text(text)) if text.is_empty() => SortKey::Missing,
            Some(Timestamp::Text(text)) => SortKey::Text(text),
            Some(Timestamp::Epoch(number)) => {
                number.as_f64().map_or(SortKey::Missing, SortKey::Epoch)
            }
        }
    }
}

impl<'de> Deserialize<'de> for RawMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_full_record() {
        let msg = RawMessage::from_value(&json!({
            "sender": "user",
            "content": "hi",
            "timestamp": "2024-01-01T00:00:00Z"
        }));

        assert_eq!(msg.sender(), Some("user"));
        assert_eq!(msg.content, json!("hi"));
        assert_eq!(msg.sort_key(), SortKey::Text("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_missing_content_reads_as_empty_text() {
        let msg = RawMessage::from_value(&json!({"sender": "agent"}));
        assert_eq!(msg.content, json!(""));
    }

    #[test]
    fn test_explicit_null_content_is_kept() {
        let msg = RawMessage::from_value(&json!({"sender": "agent", "content": null}));
        assert_eq!(msg.content, Value::Null);
    }

    #[test]
    fn test_empty_sender_is_absent() {
        let msg = RawMessage::new(Some(""), "x", None);
        assert_eq!(msg.sender(), None);
        assert_eq!(msg.sort_key(), SortKey::Missing);
    }

    #[test]
    fn test_non_string_fields_are_ignored() {
        let msg = RawMessage::from_value(&json!({"sender": 42, "timestamp": true}));
        assert_eq!(msg.sender, None);
        assert_eq!(msg.timestamp, None);
        assert_eq!(msg.sort_key(), SortKey::Missing);

        let msg = RawMessage::from_value(&json!("just a string"));
        assert_eq!(msg.sender, None);
        assert_eq!(msg.content, json!(""));
    }

    #[test]
    fn test_numeric_timestamp_is_kept() {
        let msg = RawMessage::from_value(&json!({"sender": "user", "timestamp": 1700000001}));
        assert_eq!(msg.timestamp, Some(Timestamp::Epoch(Number::from(1700000001u64))));
        assert_eq!(msg.sort_key(), SortKey::Epoch(1700000001.0));
        assert_eq!(serde_json::to_value(&msg).unwrap()["timestamp"], json!(1700000001));
    }

    #[test]
    fn test_sort_key_order() {
        assert!(SortKey::Missing < SortKey::Epoch(-1.0));
        assert!(SortKey::Epoch(2.0) < SortKey::Epoch(10.0));
        assert!(SortKey::Epoch(1e12) < SortKey::Text(""));
        assert!(SortKey::Text("10") < SortKey::Text("9"));
    }
}
