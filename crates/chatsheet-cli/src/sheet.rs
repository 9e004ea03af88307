use chatsheet_types::{Reorganized, ReorganizedMap};
use tracing::warn;

/// One rendered line of the sheet
///
/// `session` is only set on the first row of each session, the way the
/// spreadsheet groups a session's messages under a single id cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub session: Option<String>,
    pub message: String,
}

/// Flatten reorganized sessions into rows, one per sender entry of each turn
pub fn build_rows(reorganized: &ReorganizedMap) -> Vec<SheetRow> {
    let mut rows = Vec::new();

    for (session_id, session) in reorganized {
        let mut session_cell = Some(session_id.clone());

        match session {
            Reorganized::Conversation(conversation) => {
                for turn in conversation {
                    for (sender, text) in turn.iter() {
                        rows.push(SheetRow {
                            session: session_cell.take(),
                            message: format_message(sender, text),
                        });
                    }
                }
            }
            Reorganized::Passthrough(value) => {
                warn!(session_id = %session_id, "session payload is not a message list, exporting raw value");
                rows.push(SheetRow {
                    session: session_cell.take(),
                    message: value.to_string(),
                });
            }
        }
    }

    rows
}

/// `"Sender: text"` with the sender label capitalized
pub fn format_message(sender: &str, text: &str) -> String {
    format!("{}: {}", capitalize(sender), text)
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatsheet_types::{Conversation, Turn};
    use serde_json::json;

    fn conversation(turns: &[(&str, &str)]) -> Reorganized {
        Reorganized::Conversation(
            turns
                .iter()
                .map(|&(sender, text)| [(sender, text)].into_iter().collect::<Turn>())
                .collect::<Conversation>(),
        )
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("user"), "User");
        assert_eq!(capitalize("AGENT"), "Agent");
        assert_eq!(capitalize("fUNCTION call"), "Function call");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn test_session_cell_only_on_first_row() {
        let mut reorganized = ReorganizedMap::new();
        reorganized.insert(
            "101".to_string(),
            conversation(&[("user", "Hi"), ("agent", "Hello!")]),
        );
        reorganized.insert("102".to_string(), conversation(&[("user", "Bye")]));

        let rows = build_rows(&reorganized);
        assert_eq!(
            rows,
            vec![
                SheetRow {
                    session: Some("101".to_string()),
                    message: "User: Hi".to_string()
                },
                SheetRow {
                    session: None,
                    message: "Agent: Hello!".to_string()
                },
                SheetRow {
                    session: Some("102".to_string()),
                    message: "User: Bye".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_conversation_has_no_rows() {
        let mut reorganized = ReorganizedMap::new();
        reorganized.insert("empty".to_string(), conversation(&[]));
        reorganized.insert("next".to_string(), conversation(&[("agent", "x")]));

        let rows = build_rows(&reorganized);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].session.as_deref(), Some("next"));
    }

    #[test]
    fn test_passthrough_renders_raw_json() {
        let mut reorganized = ReorganizedMap::new();
        reorganized.insert(
            "bad".to_string(),
            Reorganized::Passthrough(json!({"detail": "expired"})),
        );

        let rows = build_rows(&reorganized);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].session.as_deref(), Some("bad"));
        assert_eq!(rows[0].message, r#"{"detail":"expired"}"#);
    }
}
