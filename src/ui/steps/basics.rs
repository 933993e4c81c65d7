//! Basics step: category grid and basics form

use crate::app::App;
use crate::panels::{
    BasicsFocus, CATEGORY_COLUMNS, LISTING_FEE_NOTICE, LOCATION_FIELD, OFFERING_FIELD,
};
use crate::state::{ServiceCategory, ServiceIntent};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::forms::{draw_field, field_height};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_HEIGHT: u16 = 4; // border + title + description + border

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.basics.form_visible(&app.wizard) {
        draw_form(frame, area, app);
    } else {
        draw_grid(frame, area, app);
    }
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" What type of service are you posting? ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = ServiceCategory::ALL.len().div_ceil(CATEGORY_COLUMNS);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CARD_HEIGHT * rows as u16),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); rows])
        .split(chunks[0]);

    let chosen = app.wizard.form().service_category;
    for (idx, category) in ServiceCategory::ALL.iter().enumerate() {
        let row = idx / CATEGORY_COLUMNS;
        let col = idx % CATEGORY_COLUMNS;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, CATEGORY_COLUMNS as u32); CATEGORY_COLUMNS])
            .split(row_areas[row]);
        draw_category_card(
            frame,
            cols[col],
            *category,
            idx == app.basics.grid_cursor,
            chosen == Some(*category),
        );
    }

    frame.render_widget(
        Paragraph::new(LISTING_FEE_NOTICE).style(Style::default().fg(Color::Yellow)),
        chunks[1],
    );
}

fn draw_category_card(
    frame: &mut Frame,
    area: Rect,
    category: ServiceCategory,
    is_selected: bool,
    is_chosen: bool,
) {
    let border_style = if is_chosen {
        Style::default().fg(Color::Green)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let content = vec![
        Line::from(Span::styled(category.title(), title_style)),
        Line::from(Span::styled(
            category.description(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.wizard.form();
    let focus = app.basics.focus;
    let category = form
        .service_category
        .map(|c| c.title())
        .unwrap_or_default();

    let block = Block::default()
        .title(format!(" {category} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Intent
            Constraint::Length(field_height(&OFFERING_FIELD, &form.service_offering)),
            Constraint::Length(3), // Location
            Constraint::Length(BUTTON_HEIGHT), // Change category
            Constraint::Length(1),             // Fee notice
            Constraint::Min(0),
        ])
        .split(inner);

    let intent_active = focus == BasicsFocus::Intent;
    let intent_lines: Vec<Line> = [ServiceIntent::Offering, ServiceIntent::Seeking]
        .into_iter()
        .map(|intent| {
            let checked = form.service_intent == Some(intent);
            let marker = if checked { "(•)" } else { "( )" };
            let style = if checked {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{marker} {}", intent.label()), style))
        })
        .collect();
    let intent_block = Block::default()
        .title(" Are you offering or seeking? ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if intent_active {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    frame.render_widget(Paragraph::new(intent_lines).block(intent_block), chunks[0]);

    draw_field(
        frame,
        chunks[1],
        &OFFERING_FIELD,
        &form.service_offering,
        focus == BasicsFocus::Offering,
    );
    draw_field(
        frame,
        chunks[2],
        &LOCATION_FIELD,
        &form.service_location,
        focus == BasicsFocus::Location,
    );

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(chunks[3])[0];
    render_button(
        frame,
        button_area,
        "Change category",
        focus == BasicsFocus::ChangeCategory,
        true,
    );

    frame.render_widget(
        Paragraph::new(LISTING_FEE_NOTICE)
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true }),
        chunks[4],
    );
}
