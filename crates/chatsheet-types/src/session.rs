use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::message::RawMessage;

/// Session payloads keyed by session id, in request order
pub type SessionMap = IndexMap<String, Session>;

/// A session payload, classified once when it enters the pipeline
///
/// The log service normally answers with a list of message records. Anything
/// else is carried through untouched so it can be reported downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Session {
    Messages(Vec<RawMessage>),
    Opaque(Value),
}

impl Session {
    pub fn messages(&self) -> Option<&[RawMessage]> {
        match self {
            Session::Messages(messages) => Some(messages),
            Session::Opaque(_) => None,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Session::Opaque(_))
    }
}

impl From<Value> for Session {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                Session::Messages(items.iter().map(RawMessage::from_value).collect())
            }
            other => Session::Opaque(other),
        }
    }
}

impl<'de> Deserialize<'de> for Session {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Session::from)
    }
}

/// Parse a session dump shaped `{ "<session id>": <payload>, ... }`
pub fn parse_sessions(json: &str) -> Result<SessionMap> {
    let value: Value = serde_json::from_str(json)?;

    let Value::Object(entries) = value else {
        return Err(Error::Shape(
            "expected a JSON object keyed by session id".to_string(),
        ));
    };

    Ok(entries
        .into_iter()
        .map(|(id, payload)| (id, Session::from(payload)))
        .collect())
}
