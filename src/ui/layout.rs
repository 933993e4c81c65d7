//! Layout components (header, progress indicator, footer, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{Step, TaskKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct WizardLayout {
    pub header: Rect,
    pub progress: Rect,
    pub content: Rect,
    pub footer: Rect,
}

/// Split the screen into header, progress, step content and footer.
/// The last row is left for the status bar.
pub fn create_layout(area: Rect) -> WizardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Length(4),             // Progress indicator
            Constraint::Min(0),                // Step content
            Constraint::Length(BUTTON_HEIGHT), // Footer buttons
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    WizardLayout {
        header: chunks[0],
        progress: chunks[1],
        content: chunks[2],
        footer: chunks[3],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.wizard.cursor() + 1;
    let line = Line::from(vec![
        Span::styled(
            " Post A Service ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" Step {step} of {}", Step::ALL.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the four-step progress indicator
pub fn draw_progress(frame: &mut Frame, area: Rect, app: &App) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let cursor = app.wizard.cursor();
    for step in Step::ALL {
        let index = step.index();
        let (marker, style) = if index < cursor {
            ("✓", Style::default().fg(Color::Green))
        } else if index == cursor {
            (
                "●",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };

        let content = vec![
            Line::from(Span::styled(
                format!("{marker} {}. {}", index + 1, step.label()),
                style,
            )),
            Line::from(Span::styled(
                step.description(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(style);
        frame.render_widget(Paragraph::new(content).block(block), cells[index]);
    }
}

/// Draw Previous and Next (or Publish Listing on the last step)
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(0),
            Constraint::Length(22),
        ])
        .split(area);

    let can_go_back = app.wizard.cursor() > 0;
    render_button(frame, chunks[0], "← Previous", false, can_go_back);

    if app.wizard.is_last_step() {
        render_button(
            frame,
            chunks[2],
            "Publish Listing",
            true,
            !app.preview.building,
        );
    } else {
        render_button(frame, chunks[2], "Next →", true, app.wizard.can_advance());
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    let busy =
        app.is_pending(TaskKind::TitleSuggestions) || app.is_pending(TaskKind::DraftGeneration);
    spans.push(if busy {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    });

    spans.push(Span::styled(view_hints(app), Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for what is on screen
fn view_hints(app: &App) -> &'static str {
    if app.wizard.is_submitted() {
        return "Enter:post another service";
    }
    match app.wizard.current_step() {
        Step::Basics if app.basics.form_visible(&app.wizard) => "Tab:field  ↑/↓:intent  ^N:next",
        Step::Basics => "←↑↓→:choose  Enter:select",
        Step::Title => "Tab:switch  ↑/↓:choose  Enter:use  ^N:next  ^B:back",
        Step::Describe => "Tab:field  ^G:draft  ^U:clear  ^N:next  ^B:back",
        Step::Preview => "↑/↓:scroll  ^Y:copy  ^S:publish  ^B:back  F1-F3:jump",
    }
}
