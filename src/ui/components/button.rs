//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered footer button. Disabled buttons are greyed out;
/// the primary button is highlighted when enabled.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_primary: bool,
    is_enabled: bool,
) {
    let accent = if is_primary { Color::Cyan } else { Color::Gray };

    let (border_style, text_style) = if !is_enabled {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else if is_primary {
        (
            Style::default().fg(accent),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(accent), Style::default())
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
