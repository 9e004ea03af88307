// Engine module - Core reorganization logic (content extraction, ordering, turn assembly)
// This layer sits between raw session payloads (types) and sheet rendering (cli)

pub mod content;
pub mod ordering;
pub mod session;

pub use content::{extract_from_str, extract_text, strip_tags, structured_payload, text_span};
pub use ordering::{sort_by_timestamp, sort_session};
pub use session::{TurnAggregator, aggregate_session, aggregate_turns, reorganize_session};

use chatsheet_types::{ReorganizedMap, SessionMap};

// Façade API - Stable public interface for the CLI layer

/// Sort and collapse every session independently, keeping session order
pub fn reorganize(sessions: SessionMap) -> ReorganizedMap {
    sessions
        .into_iter()
        .map(|(id, session)| (id, reorganize_session(session)))
        .collect()
}
