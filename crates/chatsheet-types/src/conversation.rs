use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reorganized sessions keyed by session id, in the same order as the input
pub type ReorganizedMap = IndexMap<String, Reorganized>;

/// One collapsed span of consecutive messages
///
/// Keys are sender labels in insertion order. The aggregation rule closes a
/// turn whenever the sender changes, so in practice a turn holds one sender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Turn(IndexMap<String, String>);

impl Turn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record text for a sender, replacing any earlier text from that sender
    pub fn insert(&mut self, sender: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(sender.into(), text.into())
    }

    pub fn get(&self, sender: &str) -> Option<&str> {
        self.0.get(sender).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn senders(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The only sender of this turn, if there is exactly one
    pub fn sole_sender(&self) -> Option<&str> {
        match self.0.len() {
            1 => self.senders().next(),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<S: Into<String>, T: Into<String>> FromIterator<(S, T)> for Turn {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut turn = Turn::new();
        for (sender, text) in iter {
            turn.insert(sender, text);
        }
        turn
    }
}

/// Ordered turns of one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation(Vec<Turn>);

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.0.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.0.iter()
    }
}

impl FromIterator<Turn> for Conversation {
    fn from_iter<I: IntoIterator<Item = Turn>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Pipeline output for one session
///
/// Serializes untagged: a conversation as `[{"sender": "text"}, ...]`, a
/// passthrough as the raw value it was received with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reorganized {
    Conversation(Conversation),
    Passthrough(Value),
}
