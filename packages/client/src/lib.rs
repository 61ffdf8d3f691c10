//! Queue-admitted streaming chat client.
//!
//! A session waits on a queue channel until the server admits it, then opens a
//! chat channel and rebuilds server-streamed responses from `chunk`/`end`
//! frames into complete messages.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
pub mod error;
