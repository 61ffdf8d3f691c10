//! Error types for the chat client.

use thiserror::Error;

/// Errors raised by a duplex channel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The channel could not be opened
    #[error("Failed to connect to {url}: {reason}")]
    Connect { url: String, reason: String },

    /// An outbound frame could not be written
    #[error("Failed to send frame: {0}")]
    Send(String),

    /// The underlying transport reported an error
    #[error("Transport error: {0}")]
    Transport(String),

    /// The channel has already been closed
    #[error("Channel is closed")]
    Closed,
}

/// Client-level errors surfaced by the binary
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The session task stopped unexpectedly
    #[error("Session task failed: {0}")]
    SessionTask(String),
}
