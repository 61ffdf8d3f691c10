//! Terminal client execution logic.

use std::sync::Arc;

use ragbot_shared::time::now_millis;
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::{mpsc, watch};

use crate::{
    config::ClientConfig,
    domain::{IdentityToken, SessionSnapshot},
    error::ClientError,
    infrastructure::channel::WebSocketConnector,
    usecase::RunSessionUseCase,
};

use super::{
    notifier::ConsoleNotifier,
    printer::TranscriptPrinter,
    prompt::{PROMPT, redisplay_prompt},
};

/// Run one session in the terminal until the user exits (Ctrl+C or Ctrl+D)
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let identity = IdentityToken::generate();
    tracing::info!("Starting session {}", identity);

    // Create channel for rustyline input
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                tracing::error!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    if input_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    let (snapshot_tx, mut snapshot_rx) = watch::channel(SessionSnapshot::default());
    let usecase = RunSessionUseCase::new(
        config,
        Arc::new(WebSocketConnector),
        Arc::new(ConsoleNotifier),
    );
    let session_identity = identity.clone();
    let session = tokio::spawn(async move {
        usecase
            .execute(session_identity, input_rx, snapshot_tx)
            .await
    });

    let mut printer = TranscriptPrinter::new(identity.as_str());
    loop {
        let snapshot = snapshot_rx.borrow_and_update().clone();
        let output = printer.render(&snapshot, now_millis());
        if !output.is_empty() {
            print!("{}", output);
            redisplay_prompt(snapshot.sending);
        }

        // Err means the session has ended and dropped its sender
        if snapshot_rx.changed().await.is_err() {
            break;
        }
    }

    let last = session
        .await
        .map_err(|e| ClientError::SessionTask(e.to_string()))?;
    tracing::info!(
        "Session {} closed with {} messages",
        identity,
        last.messages.len()
    );

    Ok(())
}
