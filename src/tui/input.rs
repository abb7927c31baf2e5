// ABOUTME: Keyboard input handling for the TUI — translates key events into actions.
// ABOUTME: Only Enter submits; editing and scrolling stay live while replies are pending.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::state::TuiState;

/// The result of processing a key event.
#[derive(Debug, PartialEq)]
pub enum InputResult {
    /// No action needed.
    None,
    /// User submitted a message.
    Send(String),
    /// User wants to quit.
    Quit,
}

/// Process a key event against the current TUI state and return the resulting action.
pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    match key.code {
        KeyCode::Enter => {
            if let Some(text) = state.submit_input() {
                InputResult::Send(text)
            } else {
                InputResult::None
            }
        }
        KeyCode::Char(c) => {
            state.insert_char_at_cursor(c);
            InputResult::None
        }
        KeyCode::Backspace => {
            state.backspace_char();
            InputResult::None
        }
        KeyCode::Delete => {
            state.delete_char_at_cursor();
            InputResult::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputResult::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputResult::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputResult::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputResult::None
        }
        // The input line is single-line, so Up/Down scroll the chat log.
        KeyCode::Up => {
            state.scroll_offset = state.scroll_offset.saturating_add(1);
            InputResult::None
        }
        KeyCode::Down => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
            InputResult::None
        }
        KeyCode::PageUp => {
            state.scroll_offset = state.scroll_offset.saturating_add(10);
            InputResult::None
        }
        KeyCode::PageDown => {
            state.scroll_offset = state.scroll_offset.saturating_sub(10);
            InputResult::None
        }
        KeyCode::Esc => InputResult::Quit,
        _ => InputResult::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_appends_to_input() {
        let mut state = TuiState::new("s".to_string());
        let result = handle_key(&mut state, make_key(KeyCode::Char('h')));
        assert_eq!(result, InputResult::None);
        assert_eq!(state.input, "h");
        assert_eq!(state.cursor_pos, 1);

        handle_key(&mut state, make_key(KeyCode::Char('i')));
        assert_eq!(state.input, "hi");
        assert_eq!(state.cursor_pos, 2);
    }

    #[test]
    fn enter_submits_input() {
        let mut state = TuiState::new("s".to_string());
        state.input = "hello".to_string();
        state.cursor_pos = 5;
        let result = handle_key(&mut state, make_key(KeyCode::Enter));
        assert_eq!(result, InputResult::Send("hello".to_string()));
        assert_eq!(state.input, "");
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn enter_on_empty_does_nothing() {
        let mut state = TuiState::new("s".to_string());
        let result = handle_key(&mut state, make_key(KeyCode::Enter));
        assert_eq!(result, InputResult::None);
    }

    #[test]
    fn enter_on_whitespace_keeps_buffer() {
        let mut state = TuiState::new("s".to_string());
        state.input = "   ".to_string();
        state.cursor_pos = 3;
        let result = handle_key(&mut state, make_key(KeyCode::Enter));
        assert_eq!(result, InputResult::None);
        assert_eq!(state.input, "   ");
    }

    #[test]
    fn only_enter_submits() {
        // With text in the buffer, no other key may produce a Send.
        let keys = [
            KeyCode::Tab,
            KeyCode::Char('x'),
            KeyCode::Backspace,
            KeyCode::Delete,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Home,
            KeyCode::End,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::PageUp,
            KeyCode::PageDown,
            KeyCode::F(1),
        ];
        for code in keys {
            let mut state = TuiState::new("s".to_string());
            state.input = "test".to_string();
            state.cursor_pos = 4;
            let result = handle_key(&mut state, make_key(code));
            assert!(
                !matches!(result, InputResult::Send(_)),
                "{:?} should not submit",
                code,
            );
        }
    }

    #[test]
    fn backspace_deletes() {
        let mut state = TuiState::new("s".to_string());
        state.input = "abc".to_string();
        state.cursor_pos = 3;
        let result = handle_key(&mut state, make_key(KeyCode::Backspace));
        assert_eq!(result, InputResult::None);
        assert_eq!(state.input, "ab");
        assert_eq!(state.cursor_pos, 2);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut state = TuiState::new("s".to_string());
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let result = handle_key(&mut state, key);
        assert_eq!(result, InputResult::Quit);
    }

    #[test]
    fn esc_quits() {
        let mut state = TuiState::new("s".to_string());
        let result = handle_key(&mut state, make_key(KeyCode::Esc));
        assert_eq!(result, InputResult::Quit);
    }

    #[test]
    fn scroll_keys_adjust_offset() {
        let mut state = TuiState::new("s".to_string());
        state.scroll_offset = 2;

        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::Up)),
            InputResult::None
        );
        assert_eq!(state.scroll_offset, 3);

        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::Down)),
            InputResult::None
        );
        assert_eq!(state.scroll_offset, 2);

        handle_key(&mut state, make_key(KeyCode::PageUp));
        assert_eq!(state.scroll_offset, 12);

        handle_key(&mut state, make_key(KeyCode::PageDown));
        assert_eq!(state.scroll_offset, 2);
    }

    #[test]
    fn typing_stays_live_while_pending() {
        let mut state = TuiState::new("s".to_string());
        state.pending = 1;
        handle_key(&mut state, make_key(KeyCode::Char('x')));
        assert_eq!(state.input, "x");

        state.input = "next".to_string();
        state.cursor_pos = 4;
        let result = handle_key(&mut state, make_key(KeyCode::Enter));
        assert_eq!(result, InputResult::Send("next".to_string()));
    }

    #[test]
    fn unicode_editing_through_key_events() {
        let mut state = TuiState::new("s".to_string());
        handle_key(&mut state, make_key(KeyCode::Char('🙂')));
        handle_key(&mut state, make_key(KeyCode::Char('é')));
        assert_eq!(state.input, "🙂é");
        assert_eq!(state.cursor_pos, 2);

        handle_key(&mut state, make_key(KeyCode::Left));
        handle_key(&mut state, make_key(KeyCode::Delete));
        assert_eq!(state.input, "🙂");
        assert_eq!(state.cursor_pos, 1);

        handle_key(&mut state, make_key(KeyCode::Backspace));
        assert_eq!(state.input, "");
        assert_eq!(state.cursor_pos, 0);
    }
}
