// Plain-text recovery from raw message bodies
//
// Message content arrives in several shapes and nothing marks which one:
//   - JSON object text carrying a form submission (`{"params": {"motivo": ...}}`)
//   - rich text with the spoken part wrapped in `<text>...</text>`
//   - plain or lightly tagged text
//
// Matchers run in that order and the first hit wins. Tag stripping is the
// fallback and always produces something, so extraction never fails.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// First `<text>...</text>` span, across line breaks
static TEXT_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text>(.*?)</text>").unwrap());

/// Any tag-like substring on a single line
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());

type Matcher = fn(&str) -> Option<String>;

const MATCHERS: &[Matcher] = &[structured_payload, text_span];

/// Best-effort plain text for a raw content value
pub fn extract_text(content: &Value) -> String {
    match content {
        Value::String(text) => extract_from_str(text),
        other => stringify(other),
    }
}

/// Best-effort plain text for string content
pub fn extract_from_str(text: &str) -> String {
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(text))
        .unwrap_or_else(|| strip_tags(text))
}

/// Structured payload: JSON object text with a `params` object
///
/// Returns `params.motivo` when present, the untouched input when `params`
/// exists without it, and None for anything else (including parse failures).
pub fn structured_payload(text: &str) -> Option<String> {
    if !(text.starts_with('{') && text.ends_with('}')) {
        return None;
    }

    let parsed: Value = serde_json::from_str(text).ok()?;
    let params = parsed.get("params")?.as_object()?;

    Some(match params.get("motivo") {
        Some(motivo) => stringify(motivo),
        None => text.to_string(),
    })
}

/// Trimmed inner text of the first `<text>` element
pub fn text_span(text: &str) -> Option<String> {
    TEXT_SPAN_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|inner| inner.as_str().trim().to_string())
}

/// Remove every tag and trim the rest
pub fn strip_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").trim().to_string()
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
