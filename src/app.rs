// App state and main event loop.
// Turns key presses into gallery intents and pumps fetch responses between frames.

use std::io;
use std::sync::Arc;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::ListState;

use crate::controller::GalleryController;
use crate::notify::ToastQueue;
use crate::ui;

/// Main application state.
pub struct App {
    pub controller: GalleryController,
    pub toasts: Arc<ToastQueue>,
    /// Highlighted card within the visible page.
    pub cards: ListState,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: GalleryController, toasts: Arc<ToastQueue>) -> Self {
        Self {
            controller,
            toasts,
            cards: ListState::default(),
            should_quit: false,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.controller.activate();
        while !self.should_quit {
            if self.controller.drain_ready() > 0 {
                self.clamp_cursor();
            }
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        if self.controller.modal().visible {
            if matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.controller.close_modal();
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.prev_page(),
            KeyCode::Right | KeyCode::Char('l') => self.next_page(),
            KeyCode::Char('s') => self.cycle_page_size(),
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
    }

    fn select_prev(&mut self) {
        let i = self.cards.selected().unwrap_or(0).saturating_sub(1);
        self.cards.select(Some(i));
        self.clamp_cursor();
    }

    fn select_next(&mut self) {
        let i = self.cards.selected().map_or(0, |i| i + 1);
        self.cards.select(Some(i));
        self.clamp_cursor();
    }

    fn prev_page(&mut self) {
        let gallery = self.controller.gallery();
        if gallery.current_page > 1 {
            let (page, size) = (gallery.current_page - 1, gallery.page_size);
            self.controller.change_page(page, size);
            self.cards.select(Some(0));
            self.clamp_cursor();
        }
    }

    fn next_page(&mut self) {
        let gallery = self.controller.gallery();
        if gallery.current_page < gallery.page_count() {
            let (page, size) = (gallery.current_page + 1, gallery.page_size);
            self.controller.change_page(page, size);
            self.cards.select(Some(0));
            self.clamp_cursor();
        }
    }

    /// Switch to the next page size, keeping the page within range.
    fn cycle_page_size(&mut self) {
        let gallery = self.controller.gallery();
        let size = gallery.next_page_size();
        let page = gallery.current_page.min(gallery.page_count_for(size));
        self.controller.change_page(page, size);
        self.clamp_cursor();
    }

    fn open_selected(&mut self) {
        let student = self
            .cards
            .selected()
            .and_then(|i| self.controller.visible_page().get(i))
            .cloned();
        if let Some(student) = student {
            self.controller.select_student(student);
        }
    }

    /// Keep the highlighted card on the visible page.
    fn clamp_cursor(&mut self) {
        let len = self.controller.visible_page().len();
        if len == 0 {
            self.cards.select(None);
        } else {
            let i = self.cards.selected().unwrap_or(0).min(len - 1);
            self.cards.select(Some(i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Evaluation, Student, StudentId, StudentSource};
    use crate::cache::{MemoryStore, STUDENTS_KEY, SessionCache};
    use crate::error::{Result, RosterError};
    use async_trait::async_trait;

    struct Offline;

    #[async_trait]
    impl StudentSource for Offline {
        async fn fetch_students(&self) -> Result<Vec<Student>> {
            Err(RosterError::Other("offline".to_string()))
        }

        async fn fetch_evaluation(&self, _id: &StudentId) -> Result<Option<Evaluation>> {
            Err(RosterError::Other("offline".to_string()))
        }
    }

    fn app_with_students(n: u64) -> App {
        let cache = SessionCache::new(Arc::new(MemoryStore::new()));
        let students: Vec<Student> = (0..n)
            .map(|i| Student {
                id: StudentId::Number(i.into()),
                name: format!("Student {}", i),
                photo: None,
            })
            .collect();
        cache.set(STUDENTS_KEY, &students).unwrap();

        let toasts = Arc::new(ToastQueue::new());
        let mut controller = GalleryController::new(Arc::new(Offline), cache, toasts.clone());
        controller.activate();
        let mut app = App::new(controller, toasts);
        app.clamp_cursor();
        app
    }

    #[test]
    fn test_paging_keys_stay_in_range() {
        let mut app = app_with_students(12);

        app.handle_key(KeyCode::Left);
        assert_eq!(app.controller.gallery().current_page, 1);

        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.controller.gallery().current_page, 3);
        assert_eq!(app.controller.visible_page().len(), 2);
    }

    #[test]
    fn test_page_size_cycle_clamps_page() {
        let mut app = app_with_students(12);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);

        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.controller.gallery().page_size, 10);
        assert_eq!(app.controller.gallery().current_page, 2);

        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.controller.gallery().page_size, 100);
        assert_eq!(app.controller.gallery().current_page, 1);
        assert_eq!(app.controller.visible_page().len(), 12);
    }

    #[test]
    fn test_cursor_clamped_to_page() {
        let mut app = app_with_students(7);
        for _ in 0..10 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.cards.selected(), Some(4));

        app.handle_key(KeyCode::Right);
        assert_eq!(app.cards.selected(), Some(0));
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.cards.selected(), Some(1));
    }

    #[tokio::test]
    async fn test_enter_opens_and_esc_closes_modal() {
        let mut app = app_with_students(3);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);

        let modal = app.controller.modal();
        assert!(modal.visible);
        assert_eq!(
            modal.selected_student.as_ref().map(|s| s.id.clone()),
            Some(StudentId::Number(1.into()))
        );

        // Keys other than close do nothing while the modal is up
        app.handle_key(KeyCode::Right);
        assert_eq!(app.controller.gallery().current_page, 1);

        app.handle_key(KeyCode::Esc);
        assert!(!app.controller.modal().visible);
        assert!(!app.should_quit);

        app.controller.settle().await;
        assert!(!app.controller.modal().visible);
    }
}
