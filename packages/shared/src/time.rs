//! Time helpers for display timestamps.

use chrono::{DateTime, Local, Utc};

/// Get the current Unix timestamp (milliseconds)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a Unix timestamp (milliseconds) to a local wall-clock time (`HH:MM:SS`).
///
/// Out-of-range timestamps fall back to the raw number.
pub fn timestamp_to_local_clock(timestamp_millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_millis) {
        Some(dt) => dt.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => timestamp_millis.to_string(),
    }
}
