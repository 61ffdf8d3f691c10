//! WebSocket implementation of the duplex channel.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

use super::{ChannelConnector, ChannelEvent, DuplexChannel};
use crate::error::ChannelError;

/// Opens `ws://` (and with the `tls` feature, `wss://`) channels
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSocketConnector;

#[async_trait]
impl ChannelConnector for WebSocketConnector {
    async fn open(&self, url: &str) -> Result<Box<dyn DuplexChannel>, ChannelError> {
        let (stream, response) = connect_async(url).await.map_err(|e| ChannelError::Connect {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(
            "WebSocket handshake with {} completed ({})",
            url,
            response.status()
        );

        Ok(Box::new(WebSocketChannel::new(url.to_string(), stream)))
    }
}

/// One WebSocket connection
pub struct WebSocketChannel {
    url: String,
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    closed: bool,
}

impl WebSocketChannel {
    pub fn new(url: String, stream: WebSocketStream<MaybeTlsStream<TcpStream>>) -> Self {
        Self {
            url,
            stream,
            closed: false,
        }
    }
}

#[async_trait]
impl DuplexChannel for WebSocketChannel {
    async fn send(&mut self, text: String) -> Result<(), ChannelError> {
        if self.closed {
            return Err(ChannelError::Closed);
        }
        self.stream
            .send(Message::Text(text.into()))
            .await
            .map_err(|e| ChannelError::Send(e.to_string()))
    }

    async fn next_event(&mut self) -> ChannelEvent {
        if self.closed {
            return ChannelEvent::Closed;
        }

        loop {
            match self.stream.next().await {
                Some(Ok(Message::Text(text))) => {
                    return ChannelEvent::Message(text.as_str().to_owned());
                }
                Some(Ok(Message::Binary(data))) => {
                    tracing::debug!("Skipping {} bytes of binary data from {}", data.len(), self.url);
                }
                Some(Ok(Message::Close(frame))) => {
                    tracing::info!("WebSocket {} was closed by the server: {:?}", self.url, frame);
                    self.closed = true;
                    return ChannelEvent::Closed;
                }
                // Ping/Pong are answered by tungstenite itself
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("WebSocket {} read error: {}", self.url, e);
                    self.closed = true;
                    return ChannelEvent::Error(ChannelError::Transport(e.to_string()));
                }
                None => {
                    tracing::info!("WebSocket {} stream ended", self.url);
                    self.closed = true;
                    return ChannelEvent::Closed;
                }
            }
        }
    }

    async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.stream.close(None).await {
            tracing::debug!("Closing {} failed: {}", self.url, e);
        }
        tracing::debug!("WebSocket {} closed", self.url);
    }
}
