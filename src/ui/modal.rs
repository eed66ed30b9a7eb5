// Evaluation modal rendering.
// Centered dialog over the gallery showing the selected student's evaluation.

use ratatui::{prelude::*, widgets::*};

use crate::state::{EvaluationView, ModalState};

/// Draw the evaluation modal on top of the current view.
pub fn draw_evaluation_modal(frame: &mut Frame, modal: &ModalState) {
    let area = frame.area();

    // Create centered modal
    let modal_width = 60u16.min(area.width);
    let modal_height = 10u16.min(area.height);
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Evaluation body
            Constraint::Length(1), // Instructions
        ])
        .split(modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", modal.title()));

    let body = match modal.view() {
        EvaluationView::Loading => Paragraph::new("⏳ Loading evaluation...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow)),
        EvaluationView::NotFound => Paragraph::new("Evaluation not found.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        EvaluationView::Loaded(evaluation) => Paragraph::new(vec![
            field("Score", evaluation.score.to_string()),
            field("Teacher", evaluation.teacher.clone()),
            field("Subject", evaluation.subject.clone()),
            field("Room", evaluation.room.clone()),
        ]),
    };
    frame.render_widget(body.block(block), chunks[0]);

    let instructions = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Yellow)),
        Span::styled("/", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" = Close ", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[1],
    );
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {}: ", label),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}
