use crate::content::extract_text;
use chatsheet_types::{Conversation, RawMessage, Turn};

/// Collapses a time-ordered message stream into speaker turns
///
/// State is the open turn plus the sender that last wrote to it. A message from
/// a different sender closes the open turn first, so an open turn only ever
/// holds one sender. A repeated sender overwrites its text: the last message of
/// a run is what the turn keeps.
#[derive(Debug, Default)]
pub struct TurnAggregator {
    conversation: Conversation,
    current: Turn,
    last_sender: Option<String>,
}

impl TurnAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message(&mut self, message: &RawMessage) {
        // Unattributed messages are dropped without touching the state
        let Some(sender) = message.sender() else {
            return;
        };

        let text = extract_text(&message.content);

        if self
            .last_sender
            .as_deref()
            .is_some_and(|last| last != sender)
        {
            self.close_turn();
        }

        self.current.insert(sender, text);
        self.last_sender = Some(sender.to_string());
    }

    pub fn last_sender(&self) -> Option<&str> {
        self.last_sender.as_deref()
    }

    pub fn current_turn(&self) -> &Turn {
        &self.current
    }

    fn close_turn(&mut self) {
        let completed = std::mem::take(&mut self.current);
        self.conversation.push(completed);
    }

    pub fn build(mut self) -> Conversation {
        if !self.current.is_empty() {
            self.close_turn();
        }
        self.conversation
    }
}
