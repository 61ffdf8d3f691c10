//! Duplex channel abstraction.
//!
//! ## Design notes
//!
//! The session runtime only knows these traits. The WebSocket implementation
//! lives in `websocket`; tests use an in-memory pair.
//!
//! Events are pulled with `next_event`, so one task can `select!` over both
//! channels and user input without shared state.

use async_trait::async_trait;

use crate::error::ChannelError;

pub mod websocket;

#[cfg(test)]
pub mod memory;

pub use websocket::{WebSocketChannel, WebSocketConnector};

/// Inbound event on a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    /// One inbound text frame
    Message(String),
    /// Transport failure; the channel is unusable afterwards
    Error(ChannelError),
    /// The peer closed the channel or the stream ended
    Closed,
}

impl ChannelEvent {
    /// Whether no further events will follow
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Message(_))
    }
}

/// A full-duplex text channel
#[async_trait]
pub trait DuplexChannel: Send {
    /// Transmit one text frame
    async fn send(&mut self, text: String) -> Result<(), ChannelError>;

    /// Wait for the next inbound event.
    ///
    /// Must be cancel safe: dropping the future loses no frame.
    async fn next_event(&mut self) -> ChannelEvent;

    /// Close the channel. Calling it again is a no-op.
    async fn close(&mut self);
}

/// Opens channels by URL
#[async_trait]
pub trait ChannelConnector: Send + Sync {
    async fn open(&self, url: &str) -> Result<Box<dyn DuplexChannel>, ChannelError>;
}
