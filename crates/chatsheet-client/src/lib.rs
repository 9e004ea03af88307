// Error types
pub mod error;

// Connection settings
pub mod config;

// Session retrieval
pub mod client;

pub use client::{SessionClient, is_empty_payload};
pub use config::ClientConfig;
pub use error::{Error, Result};
