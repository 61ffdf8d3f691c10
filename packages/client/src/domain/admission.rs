//! Admission through the queue channel.

/// The one queue frame with control meaning.
pub const ADMITTED_SENTINEL: &str = "Connected";

/// Status text shown before the first queue frame arrives.
pub const INITIAL_QUEUE_TEXT: &str = "You are in the queue!";

/// Where the session stands in the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionStatus {
    /// Still queued; the text is the latest status frame, shown verbatim
    Waiting(String),
    /// Admitted; irreversible
    Admitted,
}

impl Default for AdmissionStatus {
    fn default() -> Self {
        Self::Waiting(INITIAL_QUEUE_TEXT.to_string())
    }
}

impl AdmissionStatus {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted)
    }
}

/// Outcome of one queue frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionEvent {
    StatusChanged(String),
    Admitted,
}

/// Maps queue frames onto the admission status.
///
/// Emits `Admitted` at most once; every frame after that is ignored.
#[derive(Debug, Default)]
pub struct AdmissionController {
    status: AdmissionStatus,
}

impl AdmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &AdmissionStatus {
        &self.status
    }

    /// Apply one inbound queue frame.
    ///
    /// Returns `None` when the frame has no effect (anything after admission).
    pub fn handle_frame(&mut self, frame: &str) -> Option<AdmissionEvent> {
        if self.status.is_admitted() {
            tracing::debug!("Ignoring queue frame after admission: {}", frame);
            return None;
        }

        if frame == ADMITTED_SENTINEL {
            self.status = AdmissionStatus::Admitted;
            tracing::info!("Admitted from the queue");
            Some(AdmissionEvent::Admitted)
        } else {
            self.status = AdmissionStatus::Waiting(frame.to_string());
            tracing::debug!("Queue status: {}", frame);
            Some(AdmissionEvent::StatusChanged(frame.to_string()))
        }
    }
}
