//! Preview step: building animation, listing card, quality assessment

use crate::app::App;
use crate::panels::truncate_chars;
use crate::state::{DescriptionField, FormData, QualityRating, QualityReport};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Characters of each section shown on the card
const SECTION_PREVIEW_CHARS: usize = 120;
/// Photos named on the card; the rest are counted
const CARD_PHOTOS: usize = 4;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.preview.building {
        draw_building(frame, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let form = app.wizard.form();
    draw_card(frame, chunks[0], form, app.preview.scroll);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(chunks[1]);
    draw_quality(frame, side[0], &QualityReport::assess(form));
    draw_summary(frame, side[1], form);
}

fn draw_building(frame: &mut Frame, area: Rect, app: &App) {
    // Fade between dim and bright cyan
    let t = app.preview.animation.intensity();
    let level = (80.0 + 175.0 * t) as u8;
    let style = Style::default()
        .fg(Color::Rgb(0, level, level))
        .add_modifier(Modifier::BOLD);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);
    let content = vec![
        Line::from(Span::styled("Building your preview...", style)),
        Line::from(Span::styled(
            "Putting your listing together",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        rows[1],
    );
}

fn draw_card(frame: &mut Frame, area: Rect, form: &FormData, scroll: u16) {
    let block = Block::default()
        .title(" Listing preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = Vec::new();
    let category = form
        .service_category
        .map(|c| c.title())
        .unwrap_or("Service");
    lines.push(Line::from(Span::styled(
        format!("[{category}]"),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )));
    lines.push(Line::from(Span::styled(
        if form.title.trim().is_empty() {
            "Your listing title will appear here".to_string()
        } else {
            form.title.clone()
        },
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("📍 {}", form.service_location),
        Style::default().fg(Color::DarkGray),
    )));

    for field in [
        DescriptionField::Pricing,
        DescriptionField::Availability,
        DescriptionField::WhatsIncluded,
        DescriptionField::Experience,
    ] {
        let value = form.description(field).trim();
        if value.is_empty() {
            continue;
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            field.label(),
            Style::default().fg(Color::Cyan),
        )));
        for text in truncate_chars(value, SECTION_PREVIEW_CHARS).lines() {
            lines.push(Line::from(text.to_string()));
        }
    }

    let photos = form.photos.photos();
    lines.push(Line::from(""));
    if photos.is_empty() {
        lines.push(Line::from(Span::styled(
            "📷 No photos",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("📷 {} photo{}", photos.len(), if photos.len() == 1 { "" } else { "s" }),
            Style::default().fg(Color::Cyan),
        )));
        for photo in photos.iter().take(CARD_PHOTOS) {
            lines.push(Line::from(format!("  • {}", photo.name)));
        }
        if photos.len() > CARD_PHOTOS {
            lines.push(Line::from(Span::styled(
                format!("  +{} more", photos.len() - CARD_PHOTOS),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

fn draw_quality(frame: &mut Frame, area: Rect, report: &QualityReport) {
    let rating = report.rating();
    let rating_color = match rating {
        QualityRating::Good => Color::Green,
        QualityRating::Fair => Color::Yellow,
        QualityRating::NeedsImprovement => Color::Red,
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{}% ", report.score()),
            Style::default()
                .fg(rating_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(rating.label(), Style::default().fg(rating_color)),
    ])];
    for check in &report.checks {
        if check.passed {
            lines.push(Line::from(Span::styled(
                format!("✓ {}", check.label),
                Style::default().fg(Color::Green),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled(format!("✗ {}", check.label), Style::default().fg(Color::Red)),
                Span::styled(
                    format!(" - {}", check.suggestion),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    }

    let block = Block::default()
        .title(" Listing quality ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_summary(frame: &mut Frame, area: Rect, form: &FormData) {
    let mut lines = vec![Line::from(format!(
        "{} of {} sections completed",
        form.completed_sections(),
        DescriptionField::ALL.len()
    ))];
    for field in DescriptionField::ALL {
        let done = !form.description(field).trim().is_empty();
        let (marker, color) = if done {
            ("✓", Color::Green)
        } else {
            ("○", Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", field.label()),
            Style::default().fg(color),
        )));
    }

    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
