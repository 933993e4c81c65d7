//! Success screen shown after publishing

use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(6),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);

    let form = app.wizard.form();
    let mut content = vec![
        Line::from(Span::styled(
            "✓ Your service has been posted!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(form.title.as_str()),
    ];
    if let Some(at) = app.wizard.submitted_at() {
        content.push(Line::from(Span::styled(
            format!(
                "Published {}",
                at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(26),
            Constraint::Min(0),
        ])
        .split(rows[2]);
    render_button(frame, button_row[1], "Post Another Service", true, true);
}
