// ABOUTME: Status bar widget — renders server URL, message count, and in-flight count.
// ABOUTME: Displayed at the bottom of the TUI as a single-line summary.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Render the status bar line with server, message count, and pending exchanges.
pub fn status_line(server: &str, message_count: usize, pending: usize) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled(format!(" {} ", server), Style::default().fg(Color::Cyan)),
        Span::styled("| ", dim),
        Span::styled(
            format!("{} messages ", message_count),
            Style::default().fg(Color::White),
        ),
    ];

    if pending > 0 {
        spans.push(Span::styled("| ", dim));
        spans.push(Span::styled(
            format!("{} waiting ", pending),
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}
