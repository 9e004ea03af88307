use super::export;
use crate::session_loader::load_dump;
use crate::types::SheetFormat;
use anyhow::Result;
use std::path::Path;
use tracing::info;

pub fn handle(input: &Path, format: SheetFormat, output: Option<&Path>) -> Result<()> {
    info!(input = %input.display(), "loading session dump");
    let sessions = load_dump(input)?;

    export::handle(sessions, format, output)
}
