//! OS signal handling.
//!
//! Translates SIGINT/SIGTERM into a `Quit` message so the event loop
//! can restore the terminal before exiting.

use tokio::sync::mpsc;

use pustaka_core::prelude::*;

use crate::message::Message;

/// Spawn a background task that sends `Message::Quit` on shutdown signals.
pub fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        wait_for_shutdown().await;
        info!("Shutdown signal received");
        if msg_tx.send(Message::Quit).await.is_err() {
            warn!("Event loop already gone when the shutdown signal arrived");
        }
    });
}

#[cfg(unix)]
async fn wait_for_shutdown() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = sigterm.recv() => {}
            }
        }
        Err(e) => {
            warn!("Failed to install SIGTERM handler: {e}");
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown() {
    let _ = tokio::signal::ctrl_c().await;
}
