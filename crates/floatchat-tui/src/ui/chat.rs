//! Chat sidebar.
//!
//! Transcript on top, composed input at the bottom. The transcript always
//! follows its tail: appends (user submissions and delivered replies) are
//! immediately visible, which realizes the scroll-to-latest behavior.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use floatchat_core::chat::MessageRole;

use crate::app::App;

const PLACEHOLDER: &str = "Ask about ocean data...";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(area);
    render_transcript(frame, chunks[0], app);
    render_input(frame, chunks[1], app);
}

fn render_transcript(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().title("Chat with FloatChat-AI");
    let inner = block.inner(area);
    let width = inner.width.max(1) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for message in app.chat.messages() {
        let (label, color) = match message.role {
            MessageRole::User => ("You", Color::Green),
            MessageRole::Assistant => ("FloatChat-AI", Color::Cyan),
        };
        lines.push(Line::from(vec![
            Span::styled(
                label,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", message.timestamp.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for row in wrap(&message.content, width) {
            lines.push(Line::from(row));
        }
        lines.push(Line::default());
    }

    if app.chat.outstanding_replies() > 0 {
        lines.push(Line::styled(
            "FloatChat-AI is typing...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    // Follow the tail: keep only what fits above the input line.
    let visible = inner.height as usize;
    if lines.len() > visible {
        lines.drain(..lines.len() - visible);
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let input = app.chat.pending_input();
    let paragraph = if input.is_empty() {
        Paragraph::new(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(input)
    };
    frame.render_widget(paragraph.block(Block::bordered().title("Message")), area);

    let cursor_x = area.x + 1 + input.chars().count() as u16;
    frame.set_cursor(cursor_x.min(area.right().saturating_sub(2)), area.y + 1);
}

/// Greedy word wrap; words longer than the width are hard-split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            // Flush what we have, then take a full row from the long word
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
            }
            let split: String = word.chars().take(width).collect();
            word = &word[split.len()..];
            rows.push(split);
        }
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
