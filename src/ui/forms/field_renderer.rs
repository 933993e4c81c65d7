//! Field rendering utilities for forms

use crate::state::FieldSpec;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs, borders included
pub fn field_height(spec: &FieldSpec, value: &str) -> u16 {
    if spec.is_multiline {
        let lines = value.lines().count().max(1) + usize::from(value.ends_with('\n'));
        (lines.clamp(2, 6) as u16) + 2
    } else {
        3
    }
}

/// Draw an editable field. Empty fields show their placeholder; capped
/// fields show a character counter in the title.
pub fn draw_field(frame: &mut Frame, area: Rect, spec: &FieldSpec, value: &str, is_active: bool) {
    let accent = if is_active { Color::Cyan } else { Color::DarkGray };
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let lines: Vec<Line> = if value.is_empty() {
        let placeholder = Span::styled(
            spec.placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        vec![Line::from(vec![cursor, placeholder])]
    } else {
        let text_style = Style::default().fg(if is_active { Color::White } else { Color::Gray });
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        lines
    };

    let title = match spec.max_chars {
        Some(max) => format!(" {} ({}/{max}) ", spec.label, value.chars().count()),
        None => format!(" {} ", spec.label),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
