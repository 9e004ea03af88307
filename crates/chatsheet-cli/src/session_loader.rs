use anyhow::{Context, Result};
use chatsheet_types::{SessionMap, parse_sessions};
use std::path::Path;

/// Split raw id arguments on commas and whitespace, dropping empty tokens
///
/// Ids are opaque text; `"001"` stays `"001"`.
pub fn parse_session_ids<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
    inputs
        .iter()
        .flat_map(|input| {
            input
                .as_ref()
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Read a saved dump shaped `{"<session id>": <payload>, ...}`
pub fn load_dump(path: &Path) -> Result<SessionMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session dump: {}", path.display()))?;
    parse_sessions(&content)
        .with_context(|| format!("Failed to parse session dump: {}", path.display()))
}
