//! Domain layer: session state machines and the message model.
//!
//! Nothing here performs I/O. Each state machine consumes inbound frames or
//! user input and reports what the runtime should do next.

pub mod admission;
pub mod identity;
pub mod message;
pub mod notify;
pub mod reassembler;
pub mod session;

pub use admission::{ADMITTED_SENTINEL, AdmissionController, AdmissionEvent, AdmissionStatus};
pub use identity::IdentityToken;
pub use message::{Message, MessageLog};
pub use notify::{Notice, Notifier};
pub use reassembler::{ChatEvent, StreamReassembler};
pub use session::{Phase, SessionController, SessionEffect, SessionSnapshot};
