//! Describe step: section editors, draft controls and photos

use crate::app::App;
use crate::panels::{section_spec, DescribeFocus, PHOTO_INPUT_FIELD};
use crate::state::DescriptionField;
use crate::ui::forms::{draw_field, field_height};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.wizard.form();
    let focus = app.describe.focus;

    let mut constraints = vec![Constraint::Length(1)];
    if form.needs_personalisation() {
        constraints.push(Constraint::Length(1));
    }
    for field in DescriptionField::ALL {
        constraints.push(Constraint::Length(field_height(
            &section_spec(field),
            form.description(field),
        )));
    }
    constraints.push(Constraint::Length(3)); // Photo input
    constraints.push(Constraint::Min(3)); // Photo list

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut next = chunks.iter().copied();

    if let Some(banner) = next.next() {
        draw_banner(frame, banner, app);
    }
    if form.needs_personalisation() {
        if let Some(warning) = next.next() {
            frame.render_widget(
                Paragraph::new(
                    "⚠ Edit the generated draft to make it your own before continuing",
                )
                .style(Style::default().fg(Color::Yellow)),
                warning,
            );
        }
    }
    for field in DescriptionField::ALL {
        if let Some(field_area) = next.next() {
            draw_field(
                frame,
                field_area,
                &section_spec(field),
                form.description(field),
                focus == DescribeFocus::Section(field),
            );
        }
    }
    if let Some(input_area) = next.next() {
        draw_field(
            frame,
            input_area,
            &PHOTO_INPUT_FIELD,
            &app.describe.photo_input,
            focus == DescribeFocus::PhotoInput,
        );
    }
    if let Some(list_area) = next.next() {
        draw_photo_list(frame, list_area, app);
    }
}

fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.wizard.form();
    let completed = form.completed_sections();
    let count_style = if completed == DescriptionField::ALL.len() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let draft = if app.describe.generating {
        Span::styled("  Generating draft...", Style::default().fg(Color::Yellow))
    } else if form.generated_content.is_some() {
        Span::styled("  ^G: Regenerate draft", Style::default().fg(Color::Cyan))
    } else {
        Span::styled("  ^G: Generate draft", Style::default().fg(Color::Cyan))
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{completed} of {} sections completed", DescriptionField::ALL.len()),
            count_style,
        ),
        draft,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_photo_list(frame: &mut Frame, area: Rect, app: &App) {
    let photos = &app.wizard.form().photos;
    let active = app.describe.focus == DescribeFocus::PhotoList;
    let block = Block::default()
        .title(format!(" Photos ({}) ", photos.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if active {
            Color::Cyan
        } else {
            Color::DarkGray
        }));

    if photos.is_empty() {
        frame.render_widget(
            Paragraph::new("No photos yet. Listings with photos get more views.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let lines: Vec<Line> = photos
        .photos()
        .iter()
        .enumerate()
        .map(|(idx, photo)| {
            let is_cursor = active && idx == app.describe.photo_cursor;
            let size = photos
                .preview(photo.preview)
                .map(|p| format_size(p.size_bytes))
                .unwrap_or_default();
            let style = if is_cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(if is_cursor { "▸ " } else { "  " }, style),
                Span::styled(photo.name.clone(), style),
                Span::styled(format!("  {size}"), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let visible = area.height.saturating_sub(2) as usize;
    let scroll = app.describe.photo_cursor.saturating_sub(visible.saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((scroll, 0)),
        area,
    );
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    match bytes {
        b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{} KB", b / KB),
        b => format!("{b} B"),
    }
}
