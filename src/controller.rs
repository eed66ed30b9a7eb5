// Gallery controller.
// Decides between session cache and network for the student list and evaluations,
// and applies fetch responses to gallery and modal state.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

use crate::api::{Evaluation, Student, StudentId, StudentSource};
use crate::cache::{STUDENTS_KEY, SessionCache, evaluation_key};
use crate::error::Result;
use crate::notify::Notifier;
use crate::state::{GalleryState, LoadPhase, ModalState};

pub const STUDENTS_FAILED: &str = "Failed to load students";
pub const EVALUATION_FAILED: &str = "Failed to load evaluation.";

/// Result of a fetch task, tagged with what it was fetched for.
#[derive(Debug)]
pub enum Response {
    Students(Result<Vec<Student>>),
    Evaluation {
        student_id: StudentId,
        result: Result<Option<Evaluation>>,
    },
}

/// Owns gallery and modal state and runs fetches on behalf of the UI.
pub struct GalleryController {
    source: Arc<dyn StudentSource>,
    cache: SessionCache,
    notifier: Arc<dyn Notifier>,
    gallery: GalleryState,
    modal: ModalState,
    responses_tx: UnboundedSender<Response>,
    responses_rx: UnboundedReceiver<Response>,
    /// Spawned fetches whose responses have not been handled yet.
    in_flight: usize,
}

impl GalleryController {
    pub fn new(
        source: Arc<dyn StudentSource>,
        cache: SessionCache,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (responses_tx, responses_rx) = mpsc::unbounded_channel();
        Self {
            source,
            cache,
            notifier,
            gallery: GalleryState::new(),
            modal: ModalState::new(),
            responses_tx,
            responses_rx,
            in_flight: 0,
        }
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn has_pending(&self) -> bool {
        self.in_flight > 0
    }

    /// Load the student list, from the session cache when it holds a non-empty list.
    ///
    /// Only the first call does anything.
    pub fn activate(&mut self) {
        if self.gallery.phase != LoadPhase::Idle {
            debug!(phase = ?self.gallery.phase, "gallery already activated");
            return;
        }

        // An empty cached list counts as a miss
        match self.cache.get(STUDENTS_KEY, Vec::<Student>::new()) {
            Ok(students) if !students.is_empty() => {
                info!(count = students.len(), "student list served from session cache");
                self.gallery.set_ready(students);
                return;
            }
            Ok(_) => debug!("student list not cached"),
            Err(e) => warn!(error = %e, "unreadable student cache, fetching instead"),
        }

        self.gallery.set_loading();
        let source = Arc::clone(&self.source);
        self.spawn(async move { Response::Students(source.fetch_students().await) });
    }

    /// Open the modal for `student` and look up its evaluation.
    pub fn select_student(&mut self, student: Student) {
        let student_id = student.id.clone();
        self.modal.open(student);

        match self
            .cache
            .get::<Option<Evaluation>>(&evaluation_key(&student_id), None)
        {
            Ok(Some(evaluation)) => {
                debug!(%student_id, "evaluation served from session cache");
                self.modal.resolve(&student_id, Some(evaluation));
                return;
            }
            Ok(None) => {}
            Err(e) => warn!(%student_id, error = %e, "unreadable evaluation cache, fetching instead"),
        }

        let source = Arc::clone(&self.source);
        self.spawn(async move {
            let result = source.fetch_evaluation(&student_id).await;
            Response::Evaluation { student_id, result }
        });
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    pub fn change_page(&mut self, page: usize, page_size: usize) {
        self.gallery.change_page(page, page_size);
    }

    pub fn visible_page(&self) -> &[Student] {
        self.gallery.visible_page()
    }

    /// Apply a fetch response. Cache writes happen before the state update.
    pub fn handle_response(&mut self, response: Response) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match response {
            Response::Students(Ok(students)) => {
                info!(count = students.len(), "student list fetched");
                if let Err(e) = self.cache.set(STUDENTS_KEY, &students) {
                    warn!(error = %e, "student list cache write skipped");
                }
                self.gallery.set_ready(students);
            }
            Response::Students(Err(e)) => {
                error!(error = %e, "student list fetch failed");
                self.notifier.notify_error(STUDENTS_FAILED);
                self.gallery.set_failed();
            }
            Response::Evaluation {
                student_id,
                result: Ok(evaluation),
            } => {
                if let Some(evaluation) = &evaluation {
                    if let Err(e) = self.cache.set(&evaluation_key(&student_id), evaluation) {
                        warn!(%student_id, error = %e, "evaluation cache write skipped");
                    }
                }
                if !self.modal.resolve(&student_id, evaluation) {
                    debug!(%student_id, "discarding evaluation for a previous selection");
                }
            }
            Response::Evaluation {
                student_id,
                result: Err(e),
            } => {
                if !self.modal.is_waiting_for(&student_id) {
                    debug!(%student_id, error = %e, "discarding failure for a previous selection");
                    return;
                }
                error!(%student_id, error = %e, "evaluation fetch failed");
                self.notifier.notify_error(EVALUATION_FAILED);
                self.modal.resolve(&student_id, None);
            }
        }
    }

    /// Wait for the next fetch response, or `None` when nothing is in flight.
    #[cfg(test)]
    pub async fn next_response(&mut self) -> Option<Response> {
        if self.in_flight == 0 {
            return None;
        }
        self.responses_rx.recv().await
    }

    /// Handle responses until no fetch is in flight.
    #[cfg(test)]
    pub async fn settle(&mut self) {
        while let Some(response) = self.next_response().await {
            self.handle_response(response);
        }
    }

    /// Handle every response that has already arrived, without waiting.
    pub fn drain_ready(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(response) = self.responses_rx.try_recv() {
            self.handle_response(response);
            handled += 1;
        }
        handled
    }

    fn spawn<F>(&mut self, fetch: F)
    where
        F: Future<Output = Response> + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.responses_tx.clone();
        tokio::spawn(async move {
            // The receiver only goes away with the controller
            let _ = tx.send(fetch.await);
        });
    }
}
