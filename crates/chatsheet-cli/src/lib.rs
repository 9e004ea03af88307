// NOTE: chatsheet pipeline
//
// fetch (client) -> classify (types) -> sort + collapse (engine) -> rows -> writer
//
// Everything after retrieval is a pure function of the fetched payloads, so the
// `convert` command can replay a saved dump through exactly the same path.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod services;
pub mod session_loader;
pub mod sheet;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
