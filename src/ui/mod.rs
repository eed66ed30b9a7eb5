// UI module for rendering the TUI.
// Lays out the header, gallery, pagination and status bars, then overlays modal and toasts.

mod gallery;
mod modal;
mod toast;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Gallery
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);

    let controller = &app.controller;
    gallery::render_cards(
        frame,
        controller.gallery(),
        controller.visible_page(),
        &mut app.cards,
        chunks[1],
    );
    gallery::render_pagination(frame, controller.gallery(), chunks[2]);

    draw_status_bar(frame, controller.has_pending(), chunks[3]);

    if controller.modal().visible {
        modal::draw_evaluation_modal(frame, controller.modal());
    }

    // Toasts go on top of everything
    toast::draw_toasts(frame, &app.toasts);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" roster ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let title = Paragraph::new(Line::from(Span::styled(
        "Student list",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(block);
    frame.render_widget(title, area);
}

fn draw_status_bar(frame: &mut Frame, fetching: bool, area: Rect) {
    let keys = [
        ("↑↓", "Move"),
        ("←→", "Page"),
        ("s", "Page size"),
        ("Enter", "Evaluation"),
        ("q", "Quit"),
    ];
    let mut spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {}", key), Style::default().fg(Color::Yellow)),
                Span::styled(format!(" {} ", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    if fetching {
        spans.push(Span::styled(" ⏳ fetching", Style::default().fg(Color::Yellow)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
