// ABOUTME: App orchestrator — wires together the HTTP backend, exchange loop, and TUI.
// ABOUTME: Drives the terminal event loop until the user quits.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::client::{ChatBackend, ChatClient};
use crate::config::Config;
use crate::exchange;
use crate::tui::input::{self, InputResult};
use crate::tui::state::{ChatEvent, TuiState, UserEvent};
use crate::tui::terminal::{self, Tui};
use crate::tui::ui;

/// Top-level application that owns the config and runs the chat session.
pub struct App {
    config: Config,
}

impl App {
    /// Create a new app with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the application: spawn the exchange loop and drive the TUI.
    pub async fn run(self) -> anyhow::Result<()> {
        let backend: Arc<dyn ChatBackend> =
            Arc::new(ChatClient::new(&self.config.server.base_url));

        // Channels for TUI <-> exchange loop communication.
        let (user_tx, user_rx) = mpsc::channel::<UserEvent>(16);
        let (chat_tx, mut chat_rx) = mpsc::channel::<ChatEvent>(64);

        let exchange_handle = tokio::spawn(exchange::run_exchange_loop(
            backend, user_rx, chat_tx,
        ));

        let mut state = TuiState::new(self.config.server.base_url.clone());

        terminal::install_panic_hook();
        let mut term = terminal::init()?;
        let loop_result = run_event_loop(&mut term, &mut state, &user_tx, &mut chat_rx).await;
        terminal::restore()?;

        print_exit_screen(&state);

        // Signal the exchange loop to quit and wait for it.
        let _ = user_tx.send(UserEvent::Quit).await;
        drop(user_tx);
        let _ = exchange_handle.await;

        loop_result
    }
}

/// Drive the TUI: redraw, then wait for either a terminal event or a
/// completed exchange.
async fn run_event_loop(
    term: &mut Tui,
    state: &mut TuiState,
    user_tx: &mpsc::Sender<UserEvent>,
    chat_rx: &mut mpsc::Receiver<ChatEvent>,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();

    loop {
        term.draw(|frame| ui::render(frame, state))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        match input::handle_key(state, key) {
                            InputResult::Send(text) => {
                                // The user message lands in the log and the
                                // input clears before the request goes out.
                                state.begin_exchange(text.clone());
                                if user_tx.send(UserEvent::Message(text)).await.is_err() {
                                    break;
                                }
                            }
                            InputResult::Quit => break,
                            InputResult::None => {}
                        }
                    }
                    // Resizes and other events just trigger the next redraw.
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            maybe_chat = chat_rx.recv() => {
                match maybe_chat {
                    Some(event) => state.apply_chat_event(event),
                    None => break,
                }
            }
        }
    }

    Ok(())
}

/// Print a farewell summary after the TUI exits.
fn print_exit_screen(state: &TuiState) {
    let elapsed_secs = state.session_start.elapsed().as_secs();
    let elapsed = if elapsed_secs >= 3600 {
        format!("{}h {:02}m", elapsed_secs / 3600, (elapsed_secs % 3600) / 60)
    } else {
        format!("{}m {:02}s", elapsed_secs / 60, elapsed_secs % 60)
    };
    let msg_count = state.messages.len();

    println!();
    println!("  \x1b[1mThanks for chatting!\x1b[0m");
    println!("  Session lasted {elapsed} with {msg_count} messages exchanged.");
    println!();
}
