//! Title step: suggestion list and title input

use crate::app::App;
use crate::panels::{TitleFocus, RECOMMENDED_TITLE_CHARS, TITLE_FIELD};
use crate::ui::forms::draw_field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Suggestions
            Constraint::Length(3), // Title input
            Constraint::Length(2), // Warning / tip
        ])
        .split(area);

    draw_suggestions(frame, chunks[0], app);

    let title = &app.wizard.form().title;
    draw_field(
        frame,
        chunks[1],
        &TITLE_FIELD,
        title,
        app.title.focus == TitleFocus::Input,
    );

    let mut notes = Vec::new();
    if title.chars().count() > RECOMMENDED_TITLE_CHARS {
        notes.push(Line::from(Span::styled(
            format!(
                "⚠ Titles over {RECOMMENDED_TITLE_CHARS} characters may be cut off in search results"
            ),
            Style::default().fg(Color::Yellow),
        )));
    }
    if !title.trim().is_empty() {
        notes.push(Line::from(Span::styled(
            "Tip: mention your location and what makes your service stand out",
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(notes).wrap(Wrap { trim: true }), chunks[2]);
}

fn draw_suggestions(frame: &mut Frame, area: Rect, app: &App) {
    let panel = &app.title;
    let active = panel.focus == TitleFocus::Suggestions;
    let block = Block::default()
        .title(" Suggested titles ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if active {
            Color::Cyan
        } else {
            Color::DarkGray
        }));

    if panel.loading {
        let category = app
            .wizard
            .form()
            .service_category
            .map(|c| c.title())
            .unwrap_or("your service");
        let message = Paragraph::new(format!("Generating title ideas for {category}..."))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let chosen = app.wizard.form().selected_suggestion.as_deref();
    let mut lines = Vec::new();
    for (idx, suggestion) in panel.suggestions.iter().enumerate() {
        let is_cursor = active && idx == panel.cursor;
        let is_chosen = chosen == Some(suggestion.title.as_str());
        let marker = match (is_cursor, is_chosen) {
            (_, true) => "✓ ",
            (true, false) => "▸ ",
            _ => "  ",
        };
        let title_style = if is_cursor {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if is_chosen {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", suggestion.title),
            title_style,
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", suggestion.rationale),
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Keep the highlighted suggestion on screen
    let visible = area.height.saturating_sub(2) / 2;
    let scroll = (panel.cursor as u16).saturating_sub(visible.saturating_sub(1)) * 2;

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}
