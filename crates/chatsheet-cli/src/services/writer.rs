use crate::sheet::SheetRow;
use anyhow::{Context, Result};
use chatsheet_types::ReorganizedMap;
use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Spreadsheet column of the session id (A) and of the message (G)
const SESSION_COLUMN: usize = 0;
const MESSAGE_COLUMN: usize = 6;
const COLUMN_COUNT: usize = MESSAGE_COLUMN + 1;

const SESSION_COLUMN_WIDTH: f64 = 20.0;
const MESSAGE_COLUMN_WIDTH: f64 = 100.0;

/// Open the output file, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create file: {}", path.display()))?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn sheet_record(session: &str, message: &str) -> [String; COLUMN_COUNT] {
    let mut record: [String; COLUMN_COUNT] = Default::default();
    record[SESSION_COLUMN] = session.to_string();
    record[MESSAGE_COLUMN] = message.to_string();
    record
}

pub fn write_csv<W: Write>(writer: W, rows: &[SheetRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(sheet_record("Session", "Message"))?;
    for row in rows {
        wtr.write_record(sheet_record(
            row.session.as_deref().unwrap_or(""),
            &row.message,
        ))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Workbook with one sheet, laid out like the CSV
///
/// Data cells that hold a value wrap their text and align to the top; the
/// header row and the empty B..F columns are left unformatted.
pub fn write_xlsx<W: Write>(mut writer: W, rows: &[SheetRow]) -> Result<()> {
    let session_col = SESSION_COLUMN as u16;
    let message_col = MESSAGE_COLUMN as u16;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let cell_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);

    worksheet.set_column_width(session_col, SESSION_COLUMN_WIDTH)?;
    worksheet.set_column_width(message_col, MESSAGE_COLUMN_WIDTH)?;
    worksheet.write_string(0, session_col, "Session")?;
    worksheet.write_string(0, message_col, "Message")?;

    for (index, row) in rows.iter().enumerate() {
        let row_num = u32::try_from(index + 1).context("Too many rows for a worksheet")?;
        if let Some(session) = &row.session {
            worksheet.write_string_with_format(row_num, session_col, session, &cell_format)?;
        }
        worksheet.write_string_with_format(row_num, message_col, &row.message, &cell_format)?;
    }

    let buffer = workbook.save_to_buffer()?;
    writer.write_all(&buffer)?;
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut writer: W, reorganized: &ReorganizedMap) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, reorganized)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn write_text<W: Write>(mut writer: W, rows: &[SheetRow]) -> Result<()> {
    for row in rows {
        if let Some(session) = &row.session {
            writeln!(writer, "== {}", session)?;
        }
        writeln!(writer, "{}", row.message)?;
    }
    writer.flush()?;
    Ok(())
}
