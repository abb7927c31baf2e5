// ABOUTME: TUI state types — the chat log, input buffer, and channel events.
// ABOUTME: Bridges the exchange loop to the display and owns the submit cycle.

use std::time::Instant;

/// The kind of a single chat message displayed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChatMessageKind {
    User,
    Assistant,
}

/// A single message in the chat log.
#[derive(Debug)]
pub struct ChatMessage {
    pub kind: ChatMessageKind,
    pub content: String,
}

/// Events sent from the exchange loop to the TUI via an mpsc channel.
///
/// `id` is the monotonic exchange number assigned at send time. Completions
/// arrive in whatever order the server answers, not in send order.
#[derive(Debug, PartialEq)]
pub enum ChatEvent {
    /// The server answered an exchange.
    Reply { id: u64, text: String },
    /// An exchange failed (connection error, bad status, undecodable body).
    Failed { id: u64, error: String },
}

/// Events sent from the TUI to the exchange loop.
#[derive(Debug, PartialEq)]
pub enum UserEvent {
    /// User submitted a chat message.
    Message(String),
    /// User requested to quit.
    Quit,
}

/// Full TUI application state.
pub struct TuiState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub cursor_pos: usize,
    pub scroll_offset: u16,
    /// Number of exchanges awaiting a reply.
    pub pending: usize,
    pub server: String,
    pub session_start: Instant,
}

impl TuiState {
    /// Create a new empty TUI state pointed at the given server.
    pub fn new(server: String) -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            pending: 0,
            server,
            session_start: Instant::now(),
        }
    }

    /// Add a message to the chat log and reset scroll to bottom.
    pub fn push_message(&mut self, kind: ChatMessageKind, content: String) {
        self.messages.push(ChatMessage { kind, content });
        self.scroll_offset = 0;
    }

    /// Submit the current input buffer. Returns the trimmed text if non-empty.
    ///
    /// Whitespace-only input is left in the buffer untouched.
    pub fn submit_input(&mut self) -> Option<String> {
        let trimmed = self.input.trim().to_string();
        if trimmed.is_empty() {
            return None;
        }
        self.input.clear();
        self.cursor_pos = 0;
        Some(trimmed)
    }

    /// Record an outgoing exchange: append the user message and count it as
    /// pending. Called before the network request is issued.
    pub fn begin_exchange(&mut self, text: String) {
        self.push_message(ChatMessageKind::User, text);
        self.pending += 1;
    }

    /// Apply a completion from the exchange loop. Both outcomes append an
    /// assistant message, so every started exchange lands in the log.
    pub fn apply_chat_event(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Reply { text, .. } => {
                self.push_message(ChatMessageKind::Assistant, text);
            }
            ChatEvent::Failed { error, .. } => {
                self.push_message(ChatMessageKind::Assistant, format!("Error: {}", error));
            }
        }
        self.pending = self.pending.saturating_sub(1);
    }

    /// Clamp the cursor position to the valid character range of the input buffer.
    pub fn clamp_cursor(&mut self) {
        self.cursor_pos = self.cursor_pos.min(self.input_char_len());
    }

    /// Return the current cursor byte index in the UTF-8 input buffer.
    pub fn cursor_byte_index(&self) -> usize {
        char_index_to_byte_index(&self.input, self.cursor_pos)
    }

    /// Return the total number of characters in the input buffer.
    pub fn input_char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at the cursor and advance by one character.
    pub fn insert_char_at_cursor(&mut self, c: char) {
        self.clamp_cursor();
        let byte_index = self.cursor_byte_index();
        self.input.insert(byte_index, c);
        self.cursor_pos += 1;
    }

    /// Delete the character before the cursor (backspace behavior).
    pub fn backspace_char(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos == 0 {
            return;
        }

        let end = self.cursor_byte_index();
        let start = char_index_to_byte_index(&self.input, self.cursor_pos - 1);
        self.input.replace_range(start..end, "");
        self.cursor_pos -= 1;
    }

    /// Delete the character at the cursor (delete behavior).
    pub fn delete_char_at_cursor(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos >= self.input_char_len() {
            return;
        }

        let start = self.cursor_byte_index();
        let end = char_index_to_byte_index(&self.input, self.cursor_pos + 1);
        self.input.replace_range(start..end, "");
    }

    /// Move cursor one character to the left.
    pub fn move_cursor_left(&mut self) {
        self.clamp_cursor();
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor one character to the right.
    pub fn move_cursor_right(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos < self.input_char_len() {
            self.cursor_pos += 1;
        }
    }

    /// Move cursor to start of input.
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to end of input.
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input_char_len();
    }
}

fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    match s.char_indices().nth(char_index) {
        Some((idx, _)) => idx,
        None => s.len(),
    }
}
