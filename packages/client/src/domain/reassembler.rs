//! Reassembly of server-streamed responses on the chat channel.
//!
//! ## Rules
//!
//! - `send` appends the user's message and yields the outbound frame, at most
//!   one outstanding turn at a time.
//! - `chunk` appends content to the first message with the same id, or starts
//!   a new server message at the end of the log.
//! - `end` closes the current turn.

use super::message::{Message, MessageLog};

/// Decoded inbound chat frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// One fragment of the server message `id`
    Chunk { id: String, content: String },
    /// End of the current server turn
    End,
    /// Any other frame type
    Ignored,
}

#[derive(Debug, Default)]
pub struct StreamReassembler {
    log: MessageLog,
    sending: bool,
}

impl StreamReassembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &MessageLog {
        &self.log
    }

    /// Whether a user turn is awaiting its `end` frame
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Start a user turn.
    ///
    /// Returns the frame to transmit (the text exactly as given), or `None` when
    /// the text is blank after trimming or a turn is already outstanding.
    pub fn send(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        if self.sending {
            tracing::debug!("Send rejected: a turn is already in progress");
            return None;
        }

        self.sending = true;
        self.log.push(Message::user(text));
        Some(text.to_string())
    }

    /// Apply one inbound chat event
    pub fn apply(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::End => {
                tracing::debug!("End of streaming");
                self.sending = false;
            }
            ChatEvent::Chunk { id, content } => {
                self.log.append_fragment(&id, &content);
            }
            ChatEvent::Ignored => {}
        }
    }

    /// Record a chat channel error.
    ///
    /// The outstanding turn stays open, so no further sends are accepted.
    pub fn on_channel_error(&mut self) {
        if self.sending {
            tracing::warn!("Chat channel failed while a turn was in progress");
        }
    }
}
