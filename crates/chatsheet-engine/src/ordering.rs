use chatsheet_types::{RawMessage, Session};

/// Stable sort by timestamp, messages without one first
///
/// Text timestamps are compared as strings, which orders ISO-8601 values
/// correctly as long as the service uses one format consistently. Numeric
/// epochs compare by value.
pub fn sort_by_timestamp(mut messages: Vec<RawMessage>) -> Vec<RawMessage> {
    messages.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    messages
}

/// Sort a session's messages; opaque payloads are returned as they came
pub fn sort_session(session: Session) -> Session {
    match session {
        Session::Messages(messages) => Session::Messages(sort_by_timestamp(messages)),
        opaque @ Session::Opaque(_) => opaque,
    }
}
