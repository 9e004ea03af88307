use crate::services::writer;
use crate::sheet::build_rows;
use crate::types::SheetFormat;
use anyhow::Result;
use chatsheet_types::SessionMap;
use std::path::Path;
use tracing::info;

/// Shared tail of every command: reorganize, flatten, write
pub fn handle(sessions: SessionMap, format: SheetFormat, output: Option<&Path>) -> Result<()> {
    info!(sessions = sessions.len(), "reorganizing conversations");
    let reorganized = chatsheet_engine::reorganize(sessions);

    let destination = output.map_or_else(|| "<stdout>".to_string(), |p| p.display().to_string());
    info!(%format, %destination, "writing sheet");
    let out = writer::open_output(output)?;

    match format {
        SheetFormat::Csv => writer::write_csv(out, &build_rows(&reorganized))?,
        SheetFormat::Xlsx => writer::write_xlsx(out, &build_rows(&reorganized))?,
        SheetFormat::Json => writer::write_json(out, &reorganized)?,
        SheetFormat::Text => writer::write_text(out, &build_rows(&reorganized))?,
    }

    info!("done");
    Ok(())
}
