//! UseCase: run one session from queue admission to teardown.
//!
//! ## Flow
//!
//! 1. Open the queue channel addressed by the identity token
//! 2. Feed queue frames to the controller until it is admitted
//! 3. Close the queue channel, open the chat channel (once)
//! 4. Forward user input as sends, chat frames as reassembly events
//! 5. When input ends, close whichever channels are still open
//!
//! Everything runs on one task. `tokio::select!` interleaves the two channels
//! and user input, and each event is handled to completion before the next.

use std::{future, sync::Arc};

use tokio::sync::{mpsc, watch};

use crate::{
    config::ClientConfig,
    domain::{IdentityToken, Notice, Notifier, SessionController, SessionEffect, SessionSnapshot},
    infrastructure::{
        channel::{ChannelConnector, ChannelEvent, DuplexChannel},
        dto::conversion::decode_chat_event,
    },
};

type Channel = Box<dyn DuplexChannel>;

/// Session runner
pub struct RunSessionUseCase {
    config: ClientConfig,
    /// Opens queue and chat channels
    connector: Arc<dyn ChannelConnector>,
    /// Receives user-visible notices
    notifier: Arc<dyn Notifier>,
}

impl RunSessionUseCase {
    pub fn new(
        config: ClientConfig,
        connector: Arc<dyn ChannelConnector>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            connector,
            notifier,
        }
    }

    /// Run a session until `input` closes.
    ///
    /// # Arguments
    ///
    /// * `identity` - Session identity token, used for both endpoints
    /// * `input` - Lines typed by the user
    /// * `snapshots` - Receives a new snapshot after every state change
    ///
    /// # Returns
    ///
    /// The snapshot at teardown. Channel failures never end the session early;
    /// they are reported to the notifier.
    pub async fn execute(
        &self,
        identity: IdentityToken,
        mut input: mpsc::UnboundedReceiver<String>,
        snapshots: watch::Sender<SessionSnapshot>,
    ) -> SessionSnapshot {
        let mut session = SessionLoop {
            usecase: self,
            controller: SessionController::new(identity),
            snapshots,
            queue: None,
            chat: None,
        };
        session.publish();
        session.open_queue().await;

        loop {
            tokio::select! {
                event = next_event(&mut session.queue) => session.on_queue_event(event).await,
                event = next_event(&mut session.chat) => session.on_chat_event(event).await,
                line = input.recv() => match line {
                    Some(text) => session.on_input(text).await,
                    None => break,
                },
            }
            session.publish();
        }

        session.teardown().await;
        session.controller.snapshot()
    }
}

/// Wait on an optional channel; an absent channel never yields.
async fn next_event(channel: &mut Option<Channel>) -> ChannelEvent {
    match channel {
        Some(channel) => channel.next_event().await,
        None => future::pending().await,
    }
}

async fn close(channel: &mut Option<Channel>) {
    if let Some(mut channel) = channel.take() {
        channel.close().await;
    }
}

struct SessionLoop<'a> {
    usecase: &'a RunSessionUseCase,
    controller: SessionController,
    snapshots: watch::Sender<SessionSnapshot>,
    queue: Option<Channel>,
    chat: Option<Channel>,
}

impl SessionLoop<'_> {
    fn notify(&self, notice: Notice) {
        if notice.is_fatal() {
            tracing::error!("{:?}", notice);
        } else {
            tracing::info!("{:?}", notice);
        }
        self.usecase.notifier.notify(notice);
    }

    fn publish(&self) {
        let snapshot = self.controller.snapshot();
        self.snapshots.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }

    async fn open_queue(&mut self) {
        let url = self.usecase.config.queue_url(self.controller.identity());
        tracing::info!("Joining the queue at {}", url);
        match self.usecase.connector.open(&url).await {
            Ok(channel) => self.queue = Some(channel),
            Err(e) => {
                self.controller.handle_queue_error();
                self.notify(Notice::QueueError(e));
            }
        }
    }

    async fn open_chat(&mut self) {
        let url = self.usecase.config.chat_url(self.controller.identity());
        tracing::info!("Opening the chat at {}", url);
        match self.usecase.connector.open(&url).await {
            Ok(channel) => self.chat = Some(channel),
            Err(e) => {
                self.controller.handle_chat_error();
                self.notify(Notice::ChatError(e));
            }
        }
    }

    async fn on_queue_event(&mut self, event: ChannelEvent) {
        match event {
            ChannelEvent::Message(frame) => {
                let effect = self.controller.handle_queue_frame(&frame);
                if effect == Some(SessionEffect::EnterActive) {
                    close(&mut self.queue).await;
                    self.open_chat().await;
                }
            }
            ChannelEvent::Error(e) => {
                close(&mut self.queue).await;
                self.controller.handle_queue_error();
                self.notify(Notice::QueueError(e));
            }
            ChannelEvent::Closed => {
                close(&mut self.queue).await;
                self.notify(Notice::QueueClosed);
            }
        }
    }

    async fn on_chat_event(&mut self, event: ChannelEvent) {
        match event {
            ChannelEvent::Message(text) => {
                self.controller.handle_chat_event(decode_chat_event(&text));
            }
            ChannelEvent::Error(e) => {
                close(&mut self.chat).await;
                self.controller.handle_chat_error();
                self.notify(Notice::ChatError(e));
            }
            ChannelEvent::Closed => {
                close(&mut self.chat).await;
                self.notify(Notice::ChatClosed);
            }
        }
    }

    async fn on_input(&mut self, text: String) {
        let Some(chat) = self.chat.as_mut() else {
            tracing::debug!("No chat channel, input dropped");
            return;
        };
        let Some(frame) = self.controller.send(&text) else {
            return;
        };

        let result = chat.send(frame).await;
        if let Err(e) = result {
            close(&mut self.chat).await;
            self.controller.handle_chat_error();
            self.notify(Notice::ChatError(e));
        }
    }

    async fn teardown(&mut self) {
        close(&mut self.queue).await;
        close(&mut self.chat).await;
        tracing::info!("Session {} ended", self.controller.identity());
    }
}
