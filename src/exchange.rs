// ABOUTME: Exchange loop — turns each submitted message into one backend round trip.
// ABOUTME: Spawns a detached task per message; completions arrive in answer order.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::ChatBackend;
use crate::tui::state::{ChatEvent, UserEvent};

/// Run the exchange loop, forwarding one `ChatEvent` per submitted message.
///
/// Each message gets a monotonic exchange id at send time. Exchanges run as
/// independent tasks, so a slow reply never blocks later submissions and
/// completions are forwarded in whatever order the server answers. The loop
/// ends on `UserEvent::Quit` or when the sender side is dropped; in-flight
/// tasks are left to finish on their own.
pub async fn run_exchange_loop(
    backend: Arc<dyn ChatBackend>,
    mut user_rx: mpsc::Receiver<UserEvent>,
    chat_tx: mpsc::Sender<ChatEvent>,
) {
    let mut next_id: u64 = 0;

    loop {
        let event = match user_rx.recv().await {
            Some(e) => e,
            None => break, // Channel closed.
        };

        match event {
            UserEvent::Quit => break,
            UserEvent::Message(text) => {
                next_id += 1;
                let id = next_id;
                let backend = Arc::clone(&backend);
                let chat_tx = chat_tx.clone();
                tokio::spawn(async move {
                    let event = match backend.request_reply(&text).await {
                        Ok(reply) => ChatEvent::Reply { id, text: reply },
                        Err(e) => ChatEvent::Failed {
                            id,
                            error: e.to_string(),
                        },
                    };
                    // Ignore send errors: the TUI may already be gone.
                    let _ = chat_tx.send(event).await;
                });
            }
        }
    }
}
