use super::turn_builder::TurnAggregator;
use crate::ordering::sort_session;
use chatsheet_types::{Conversation, RawMessage, Reorganized, Session};

/// Collapse already-sorted messages into turns
pub fn aggregate_turns(messages: &[RawMessage]) -> Conversation {
    let mut aggregator = TurnAggregator::new();
    for message in messages {
        aggregator.add_message(message);
    }
    aggregator.build()
}

/// Collapse a sorted session; opaque payloads become passthrough output
pub fn aggregate_session(session: Session) -> Reorganized {
    match session {
        Session::Messages(messages) => Reorganized::Conversation(aggregate_turns(&messages)),
        Session::Opaque(value) => Reorganized::Passthrough(value),
    }
}

/// Order a session's messages by time, then collapse them into turns
pub fn reorganize_session(session: Session) -> Reorganized {
    aggregate_session(sort_session(session))
}
