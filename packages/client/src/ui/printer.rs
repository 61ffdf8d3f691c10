//! Incremental transcript rendering.
//!
//! Snapshots carry the whole session; the printer remembers what it has
//! already written and renders only the difference.

use crate::domain::{AdmissionStatus, SessionSnapshot};

use super::formatter::MessageFormatter;

pub struct TranscriptPrinter {
    identity: String,
    status: Option<AdmissionStatus>,
    /// Bytes of content already printed, per message index
    printed: Vec<usize>,
    /// Message printed most recently, to decide whether a label is needed
    last_index: Option<usize>,
    sending: bool,
}

impl TranscriptPrinter {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            status: None,
            printed: Vec::new(),
            last_index: None,
            sending: false,
        }
    }

    /// Render everything in `snapshot` that has not been printed yet
    ///
    /// # Arguments
    ///
    /// * `snapshot` - Latest session snapshot
    /// * `now_millis` - Timestamp used for sent confirmations
    pub fn render(&mut self, snapshot: &SessionSnapshot, now_millis: i64) -> String {
        let mut output = String::new();

        if self.status.as_ref() != Some(&snapshot.status) {
            match &snapshot.status {
                AdmissionStatus::Waiting(text) => {
                    if self.status.is_none() {
                        output.push_str(&MessageFormatter::format_waiting_header());
                    }
                    output.push_str(&MessageFormatter::format_queue_status(text));
                }
                AdmissionStatus::Admitted => {
                    output.push_str(&MessageFormatter::format_chat_header(&self.identity));
                }
            }
            self.status = Some(snapshot.status.clone());
        }

        for (index, message) in snapshot.messages.iter().enumerate() {
            if index >= self.printed.len() {
                self.printed.push(0);
                if message.is_user {
                    output.push_str(&MessageFormatter::format_sent_confirmation(now_millis));
                    self.printed[index] = message.content.len();
                    self.last_index = Some(index);
                    continue;
                }
                output.push_str(&MessageFormatter::format_server_label());
                self.last_index = Some(index);
            }

            let printed = self.printed[index];
            let Some(delta) = message.content.get(printed..) else {
                continue;
            };
            if delta.is_empty() {
                continue;
            }
            if self.last_index != Some(index) {
                let id = message.id.as_deref().unwrap_or_default();
                output.push_str(&MessageFormatter::format_continuation_label(id));
                self.last_index = Some(index);
            }
            output.push_str(delta);
            self.printed[index] = message.content.len();
        }

        if self.sending && !snapshot.sending {
            output.push_str(&MessageFormatter::format_turn_end());
        }
        self.sending = snapshot.sending;

        output
    }
}
