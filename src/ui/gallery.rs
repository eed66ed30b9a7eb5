// Student gallery rendering.
// Card list for the visible page with loading and empty states, plus the pagination bar.

use ratatui::{prelude::*, widgets::*};

use crate::api::Student;
use crate::state::{GalleryState, LoadPhase};

/// Shown in place of a missing photo URL.
const PHOTO_PLACEHOLDER: &str = "(no photo)";

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

fn card(student: &Student) -> ListItem<'_> {
    let photo = student.photo.as_deref().unwrap_or(PHOTO_PLACEHOLDER);
    ListItem::new(vec![
        Line::from(Span::styled(
            &student.name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", photo),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

/// Render the cards for the current page.
pub fn render_cards(
    frame: &mut Frame,
    gallery: &GalleryState,
    page: &[Student],
    cards: &mut ListState,
    area: Rect,
) {
    let block = Block::default().borders(Borders::ALL).title(" Students ");

    match gallery.phase {
        LoadPhase::Idle | LoadPhase::Loading => {
            frame.render_widget(block, area);
            render_loading(frame, inner(area), "Loading students");
        }
        LoadPhase::Failed if gallery.students.is_empty() => {
            frame.render_widget(block, area);
            render_empty(frame, inner(area), "Students could not be loaded");
        }
        _ if page.is_empty() => {
            frame.render_widget(block, area);
            render_empty(frame, inner(area), "No students on this page");
        }
        _ => {
            let items: Vec<ListItem> = page.iter().map(card).collect();
            let list_widget = List::new(items)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            frame.render_stateful_widget(list_widget, area, cards);
        }
    }
}

/// Render the pagination bar.
pub fn render_pagination(frame: &mut Frame, gallery: &GalleryState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" Page ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}/{}", gallery.current_page, gallery.page_count()),
            Style::default().fg(Color::White),
        ),
        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} per page", gallery.page_size),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(" · {} students", gallery.students.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn inner(area: Rect) -> Rect {
    area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    })
}
