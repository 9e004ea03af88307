pub mod conversation;
pub mod error;
pub mod message;
pub mod session;

pub use conversation::{Conversation, Reorganized, ReorganizedMap, Turn};
pub use error::{Error, Result};
pub use message::{RawMessage, SortKey, Timestamp};
pub use session::{Session, SessionMap, parse_sessions};
