//! In-memory channel pair for tests.

use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ChannelConnector, ChannelEvent, DuplexChannel};
use crate::error::ChannelError;

/// Client side of an in-memory channel
pub struct MemoryChannel {
    inbound: mpsc::UnboundedReceiver<ChannelEvent>,
    outbound: mpsc::UnboundedSender<String>,
    close_count: Arc<AtomicUsize>,
    closed: bool,
}

/// Test side of an in-memory channel
pub struct MemoryPeer {
    pub events: mpsc::UnboundedSender<ChannelEvent>,
    pub sent: mpsc::UnboundedReceiver<String>,
    close_count: Arc<AtomicUsize>,
}

impl MemoryPeer {
    /// Push one inbound text frame
    pub fn push(&self, text: &str) {
        self.events
            .send(ChannelEvent::Message(text.to_string()))
            .expect("channel dropped");
    }

    /// Number of `close` calls made by the client side
    pub fn close_count(&self) -> usize {
        self.close_count.load(Ordering::SeqCst)
    }
}

pub fn pair() -> (MemoryChannel, MemoryPeer) {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (sent_tx, sent_rx) = mpsc::unbounded_channel();
    let close_count = Arc::new(AtomicUsize::new(0));

    (
        MemoryChannel {
            inbound: events_rx,
            outbound: sent_tx,
            close_count: close_count.clone(),
            closed: false,
        },
        MemoryPeer {
            events: events_tx,
            sent: sent_rx,
            close_count,
        },
    )
}

#[async_trait]
impl DuplexChannel for MemoryChannel {
    async fn send(&mut self, text: String) -> Result<(), ChannelError> {
        if self.closed {
            return Err(ChannelError::Closed);
        }
        self.outbound
            .send(text)
            .map_err(|e| ChannelError::Send(e.to_string()))
    }

    async fn next_event(&mut self) -> ChannelEvent {
        if self.closed {
            return ChannelEvent::Closed;
        }
        let event = self.inbound.recv().await.unwrap_or(ChannelEvent::Closed);
        if event.is_terminal() {
            self.closed = true;
        }
        event
    }

    async fn close(&mut self) {
        self.closed = true;
        self.close_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Hands out prepared channels in order and records the URLs opened
#[derive(Default)]
pub struct MemoryConnector {
    channels: Mutex<VecDeque<Result<MemoryChannel, ChannelError>>>,
    opened: Mutex<Vec<String>>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a channel for the next `open`
    pub fn prepare(&self) -> MemoryPeer {
        let (channel, peer) = pair();
        self.channels.lock().unwrap().push_back(Ok(channel));
        peer
    }

    /// Make the next `open` fail
    pub fn prepare_failure(&self, error: ChannelError) {
        self.channels.lock().unwrap().push_back(Err(error));
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelConnector for MemoryConnector {
    async fn open(&self, url: &str) -> Result<Box<dyn DuplexChannel>, ChannelError> {
        self.opened.lock().unwrap().push(url.to_string());
        let next = self.channels.lock().unwrap().pop_front();
        match next {
            Some(Ok(channel)) => Ok(Box::new(channel)),
            Some(Err(e)) => Err(e),
            None => Err(ChannelError::Connect {
                url: url.to_string(),
                reason: "no channel prepared".to_string(),
            }),
        }
    }
}
