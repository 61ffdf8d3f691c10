//! Message model and the append-only message log.

/// One displayable chat message.
///
/// User messages carry no id and are never merged with server fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Option<String>,
    pub content: String,
    pub is_user: bool,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            is_user: true,
        }
    }

    pub fn server(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            content: content.into(),
            is_user: false,
        }
    }
}

/// Ordered messages; insertion order is display order.
///
/// Entries are never removed or reordered. The only mutation besides `push`
/// is appending content to a server message in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.entries.push(message);
    }

    /// Index of the first entry whose non-null id equals `id` (linear scan from the start)
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|message| message.id.as_deref() == Some(id))
    }

    /// Append a server fragment.
    ///
    /// Extends the first entry with the same id, or pushes a new server entry.
    pub fn append_fragment(&mut self, id: &str, content: &str) {
        match self.position_of(id) {
            Some(index) => self.entries[index].content.push_str(content),
            None => self.entries.push(Message::server(id, content)),
        }
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
