//! Infrastructure layer: wire formats and transports.

pub mod channel;
pub mod dto;
