//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: Entry point that owns the terminal
//! - `run_loop`: Main event loop processing terminal events and messages

use tokio::sync::mpsc;

use pustaka_app::handler::{update, UpdateAction};
use pustaka_app::signals;
use pustaka_app::state::AppState;
use pustaka_app::{Message, Settings, ThemeStore};
use pustaka_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application until the user quits.
pub async fn run(settings: Settings, mut theme_store: Box<dyn ThemeStore>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    // Create initial state with settings
    let mut state = AppState::with_settings(settings);
    info!("Pustaka storefront starting (theme: {})", state.theme);

    // Unified message channel (for the signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // Run the main loop
    let result = run_loop(&mut term, &mut state, msg_rx, theme_store.as_mut());

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    theme_store: &mut dyn ThemeStore,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from the signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, theme_store);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, theme_store);
        }
    }

    Ok(())
}

/// Run a message and any follow-ups through update(), performing the
/// actions the loop owns.
fn process_message(state: &mut AppState, message: Message, theme_store: &mut dyn ThemeStore) {
    let mut current = Some(message);
    while let Some(msg) = current.take() {
        let result = update(state, msg);
        if let Some(action) = result.action {
            handle_action(action, theme_store);
        }
        current = result.message;
    }
}

fn handle_action(action: UpdateAction, theme_store: &mut dyn ThemeStore) {
    match action {
        UpdateAction::PersistTheme(theme) => {
            if let Err(e) = theme_store.save_theme(theme) {
                warn!("Failed to persist theme preference: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pustaka_app::config::MemoryThemeStore;
    use pustaka_app::InputKey;

    #[test]
    fn test_process_message_follows_key_to_state_change() {
        let mut state = AppState::new();
        let mut store = MemoryThemeStore::default();
        process_message(
            &mut state,
            Message::Key(InputKey::Char('a')),
            &mut store,
        );
        assert_eq!(state.cart.len(), 1);
    }

    #[test]
    fn test_theme_toggle_persists_through_store() {
        let mut state = AppState::new();
        let mut store = MemoryThemeStore::default();
        assert_eq!(store.load_theme(), None);
        process_message(
            &mut state,
            Message::Key(InputKey::Char('d')),
            &mut store,
        );
        assert_eq!(store.load_theme(), Some(state.theme));
    }

    #[test]
    fn test_quit_message_stops_the_loop_condition() {
        let mut state = AppState::new();
        let mut store = MemoryThemeStore::default();
        process_message(&mut state, Message::Quit, &mut store);
        assert!(state.should_quit());
    }
}
