//! Session controller: the `Waiting -> Active` state machine.

use super::{
    admission::{AdmissionController, AdmissionEvent, AdmissionStatus},
    identity::IdentityToken,
    message::Message,
    reassembler::{ChatEvent, StreamReassembler},
};

/// Session phase. There is no way back from `Active`.
#[derive(Debug)]
pub enum Phase {
    Waiting(AdmissionController),
    Active(StreamReassembler),
}

/// Side effect the runtime must carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Admission completed: close the queue channel and open the chat channel
    EnterActive,
}

/// What the presentation layer sees
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub status: AdmissionStatus,
    pub messages: Vec<Message>,
    /// Awaiting the end of the server turn
    pub sending: bool,
}

#[derive(Debug)]
pub struct SessionController {
    identity: IdentityToken,
    phase: Phase,
}

impl SessionController {
    /// Start a session in the waiting phase
    pub fn new(identity: IdentityToken) -> Self {
        Self {
            identity,
            phase: Phase::Waiting(AdmissionController::new()),
        }
    }

    pub fn identity(&self) -> &IdentityToken {
        &self.identity
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    pub fn status(&self) -> AdmissionStatus {
        match &self.phase {
            Phase::Waiting(admission) => admission.status().clone(),
            Phase::Active(_) => AdmissionStatus::Admitted,
        }
    }

    pub fn is_sending(&self) -> bool {
        match &self.phase {
            Phase::Waiting(_) => false,
            Phase::Active(reassembler) => reassembler.is_sending(),
        }
    }

    /// Apply an inbound queue frame.
    ///
    /// Returns `EnterActive` exactly once, on the frame that admits the session.
    pub fn handle_queue_frame(&mut self, frame: &str) -> Option<SessionEffect> {
        let Phase::Waiting(admission) = &mut self.phase else {
            tracing::debug!("Queue frame after admission ignored");
            return None;
        };

        match admission.handle_frame(frame)? {
            AdmissionEvent::StatusChanged(_) => None,
            AdmissionEvent::Admitted => {
                self.phase = Phase::Active(StreamReassembler::new());
                tracing::info!("Session {} entered the chat", self.identity);
                Some(SessionEffect::EnterActive)
            }
        }
    }

    /// Queue channel failed; the status stays at its last waiting text.
    pub fn handle_queue_error(&mut self) {
        if let Phase::Waiting(admission) = &self.phase {
            tracing::warn!("Admission stalled at {:?}", admission.status());
        }
    }

    pub fn handle_chat_event(&mut self, event: ChatEvent) {
        match &mut self.phase {
            Phase::Active(reassembler) => reassembler.apply(event),
            Phase::Waiting(_) => {
                tracing::warn!("Chat event before admission ignored: {:?}", event);
            }
        }
    }

    pub fn handle_chat_error(&mut self) {
        if let Phase::Active(reassembler) = &mut self.phase {
            reassembler.on_channel_error();
        }
    }

    /// Start a user turn. Returns the frame to transmit on the chat channel.
    ///
    /// Rejected silently while waiting, for blank text, or during an outstanding turn.
    pub fn send(&mut self, text: &str) -> Option<String> {
        match &mut self.phase {
            Phase::Active(reassembler) => reassembler.send(text),
            Phase::Waiting(_) => {
                tracing::debug!("Send rejected: not admitted yet");
                None
            }
        }
    }

    pub fn messages(&self) -> &[Message] {
        match &self.phase {
            Phase::Waiting(_) => &[],
            Phase::Active(reassembler) => reassembler.messages().as_slice(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status(),
            messages: self.messages().to_vec(),
            sending: self.is_sending(),
        }
    }
}
