// ABOUTME: Chat log widget — renders chat messages into styled ratatui Lines.
// ABOUTME: User and assistant messages get distinct prefixes; bodies are plain text.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::state::{ChatMessage, ChatMessageKind};

/// Render a slice of chat messages into styled Lines for display.
///
/// Message bodies are rendered as raw spans: reply text is never interpreted
/// as markup, so a reply cannot restyle anything outside its own lines.
pub fn render_chat_lines(messages: &[ChatMessage]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (idx, msg) in messages.iter().enumerate() {
        // Blank separator line between messages.
        if idx > 0 {
            lines.push(Line::from(""));
        }

        match msg.kind {
            ChatMessageKind::User => {
                lines.push(Line::from(vec![
                    Span::styled(
                        "❯ ",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(msg.content.clone()),
                ]));
            }
            ChatMessageKind::Assistant => {
                // First line gets the prefix, subsequent lines are plain.
                let content_lines: Vec<&str> = msg.content.split('\n').collect();
                for (i, text) in content_lines.iter().enumerate() {
                    if i == 0 {
                        lines.push(Line::from(vec![
                            Span::styled(
                                "⏺ ",
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::raw(text.to_string()),
                        ]));
                    } else {
                        lines.push(Line::from(Span::raw(text.to_string())));
                    }
                }
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_has_green_prefix() {
        let messages = vec![ChatMessage {
            kind: ChatMessageKind::User,
            content: "hello".to_string(),
        }];
        let lines = render_chat_lines(&messages);
        assert_eq!(lines.len(), 1);
        let spans = &lines[0].spans;
        assert!(spans.len() >= 2);
        assert_eq!(spans[0].content, "❯ ");
        assert_eq!(spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn assistant_message_has_cyan_prefix() {
        let messages = vec![ChatMessage {
            kind: ChatMessageKind::Assistant,
            content: "hi there".to_string(),
        }];
        let lines = render_chat_lines(&messages);
        assert_eq!(lines.len(), 1);
        let spans = &lines[0].spans;
        assert_eq!(spans[0].content, "⏺ ");
        assert_eq!(spans[0].style.fg, Some(Color::Cyan));
    }

    #[test]
    fn multiline_assistant_message() {
        let messages = vec![ChatMessage {
            kind: ChatMessageKind::Assistant,
            content: "line1\nline2\nline3".to_string(),
        }];
        let lines = render_chat_lines(&messages);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn blank_separator_between_messages() {
        let messages = vec![
            ChatMessage {
                kind: ChatMessageKind::User,
                content: "hi".to_string(),
            },
            ChatMessage {
                kind: ChatMessageKind::Assistant,
                content: "hello".to_string(),
            },
        ];
        let lines = render_chat_lines(&messages);
        // user line, blank separator, assistant line
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].spans.len(), 0);
    }

    #[test]
    fn reply_markup_is_rendered_literally() {
        let messages = vec![ChatMessage {
            kind: ChatMessageKind::Assistant,
            content: "<b>bold?</b>".to_string(),
        }];
        let lines = render_chat_lines(&messages);
        assert_eq!(lines.len(), 1);
        // The tag text survives verbatim as content, never as styling.
        assert_eq!(lines[0].spans[1].content, "<b>bold?</b>");
        assert_eq!(lines[0].spans[1].style, Style::default());
    }
}
