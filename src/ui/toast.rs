// Toast rendering.
// Stacks active error notifications in the top-right corner.

use chrono::Utc;
use ratatui::{prelude::*, widgets::*};

use crate::notify::ToastQueue;

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

pub fn draw_toasts(frame: &mut Frame, toasts: &ToastQueue) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    let x = area.width.saturating_sub(width);

    for (i, toast) in toasts.active(Utc::now()).iter().enumerate() {
        let y = i as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.height {
            break;
        }
        let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);

        frame.render_widget(Clear, toast_area);
        let text = Paragraph::new(format!("❌ {}", toast.message))
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            );
        frame.render_widget(text, toast_area);
    }
}
