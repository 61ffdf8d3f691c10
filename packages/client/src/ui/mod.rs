//! Presentation layer for the terminal client.

mod formatter;
mod notifier;
mod printer;
mod prompt;
mod runner;

pub use formatter::MessageFormatter;
pub use notifier::ConsoleNotifier;
pub use printer::TranscriptPrinter;
pub use runner::run_client;
