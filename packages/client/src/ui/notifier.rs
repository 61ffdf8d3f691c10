//! Terminal notifier.

use crate::domain::{Notice, Notifier};

use super::{formatter::MessageFormatter, prompt::redisplay_prompt};

/// Prints notices to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        print!("{}", MessageFormatter::format_notice(&notice));
        redisplay_prompt(false);
    }
}
