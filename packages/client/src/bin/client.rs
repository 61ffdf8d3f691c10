//! Terminal client for a queue-admitted streaming chat service.
//!
//! Joins the queue, shows each status update, then switches to a chat prompt
//! once the server admits the session. Responses are printed as they stream in.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin ragbot-client
//! cargo run --bin ragbot-client -- --url ws://127.0.0.1:8000/ragbot
//! cargo run --features tls --bin ragbot-client -- -u wss://example.com/ragbot
//! ```

use clap::Parser;

use ragbot_client::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_CHAT_PATH, DEFAULT_QUEUE_PATH};
use ragbot_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "ragbot-client")]
#[command(about = "Queue-admitted streaming chat client over WebSocket", long_about = None)]
struct Args {
    /// WebSocket base URL (scheme, host and optional path prefix)
    #[arg(short = 'u', long, default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Path of the queue endpoint
    #[arg(long, default_value = DEFAULT_QUEUE_PATH)]
    queue_path: String,

    /// Path of the chat endpoint
    #[arg(long, default_value = DEFAULT_CHAT_PATH)]
    chat_path: String,

    /// Default log level (overridden by RUST_LOG)
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_PKG_NAME"), &args.log_level);

    let config = match ClientConfig::new(args.url, args.queue_path, args.chat_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = ragbot_client::ui::run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
