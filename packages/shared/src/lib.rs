//! Utilities shared by the ragbot binaries.

pub mod logger;
pub mod time;
