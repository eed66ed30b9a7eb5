// Gallery state management.
// Holds the resident student list, load phase, and page window over it.

use crate::api::Student;

/// Page size applied once the student list settles.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page sizes the pagination bar cycles through.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 100];

/// Phase of the one-shot student list load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Student list and pagination window.
#[derive(Debug, Clone)]
pub struct GalleryState {
    pub students: Vec<Student>,
    pub phase: LoadPhase,
    /// 1-based page number.
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            phase: LoadPhase::Idle,
            current_page: 1,
            page_size: 0,
        }
    }
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True only while the initial fetch is outstanding.
    pub fn loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn set_loading(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Settle with a fetched or cached list, resetting to the first page.
    pub fn set_ready(&mut self, students: Vec<Student>) {
        self.students = students;
        self.phase = LoadPhase::Ready;
        self.current_page = 1;
        self.page_size = DEFAULT_PAGE_SIZE;
    }

    /// Settle after a failed fetch, leaving the list untouched.
    pub fn set_failed(&mut self) {
        self.phase = LoadPhase::Failed;
    }

    /// Move the page window. Never touches the student list.
    pub fn change_page(&mut self, page: usize, page_size: usize) {
        self.current_page = page.max(1);
        self.page_size = page_size;
    }

    /// Students on the current page, empty when the page is out of range.
    pub fn visible_page(&self) -> &[Student] {
        let start = self.current_page.saturating_sub(1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(self.students.len());
        self.students.get(start..end).unwrap_or(&[])
    }

    /// Number of pages at `page_size`, at least 1.
    pub fn page_count_for(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 1;
        }
        self.students.len().div_ceil(page_size).max(1)
    }

    pub fn page_count(&self) -> usize {
        self.page_count_for(self.page_size)
    }

    /// Next page size option after the current one, wrapping around.
    pub fn next_page_size(&self) -> usize {
        PAGE_SIZE_OPTIONS
            .iter()
            .position(|&size| size == self.page_size)
            .map(|i| PAGE_SIZE_OPTIONS[(i + 1) % PAGE_SIZE_OPTIONS.len()])
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
