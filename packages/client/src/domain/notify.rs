//! User-visible notifications.
//!
//! Every channel failure ends at a notifier; none of them stop the process.

use std::fmt;

use crate::error::ChannelError;

const LOAD_ERROR_TEXT: &str = "There was an error loading the chat";

/// Something the user must be made aware of
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The queue channel failed to open or errored; admission stalls
    QueueError(ChannelError),
    /// The chat channel failed to open or errored; the current turn never completes
    ChatError(ChannelError),
    /// The queue channel closed before admission
    QueueClosed,
    /// The chat channel closed; a new session is needed
    ChatClosed,
}

impl Notice {
    /// Whether the affected channel can no longer do its job
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::QueueError(_) | Self::ChatError(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueError(_) | Self::ChatError(_) => f.write_str(LOAD_ERROR_TEXT),
            Self::QueueClosed => f.write_str("The queue connection was closed."),
            Self::ChatClosed => f.write_str(
                "The chat connection was closed. Restart the client to start a new session.",
            ),
        }
    }
}

/// Sink for notices, implemented by the presentation layer
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}
