//! Prompt handling.

use std::io::Write;

pub const PROMPT: &str = "you> ";
const BUSY_PROMPT: &str = "you (waiting for reply)> ";

/// Prompt text for the current turn state
pub fn prompt_for(sending: bool) -> &'static str {
    if sending { BUSY_PROMPT } else { PROMPT }
}

/// Redisplay the prompt after printing output
pub fn redisplay_prompt(sending: bool) {
    print!("{}", prompt_for(sending));
    std::io::stdout().flush().ok();
}
