//! Data Transfer Objects for the chat channel.
//!
//! - `websocket`: inbound chat frame DTOs
//! - `conversion`: DTO → domain event conversion

pub mod conversion;
pub mod websocket;
