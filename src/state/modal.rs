// Evaluation modal state.
// Tracks the selected student and guards against responses for earlier selections.

use crate::api::{Evaluation, Student, StudentId};

/// What the modal body should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvaluationView<'a> {
    Loading,
    Loaded(&'a Evaluation),
    NotFound,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub visible: bool,
    pub selected_student: Option<Student>,
    pub evaluation: Option<Evaluation>,
    pub evaluation_loading: bool,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the modal for `student` with its evaluation pending.
    pub fn open(&mut self, student: Student) {
        *self = Self {
            visible: true,
            selected_student: Some(student),
            evaluation: None,
            evaluation_loading: true,
        };
    }

    /// Reset every field to its closed value.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Whether the modal is still waiting on an evaluation for `id`.
    pub fn is_waiting_for(&self, id: &StudentId) -> bool {
        self.evaluation_loading
            && self
                .selected_student
                .as_ref()
                .is_some_and(|student| &student.id == id)
    }

    /// Settle the pending lookup for `id`. `None` settles as not found.
    ///
    /// Returns false and changes nothing when `id` is no longer the selection.
    pub fn resolve(&mut self, id: &StudentId, evaluation: Option<Evaluation>) -> bool {
        if !self.is_waiting_for(id) {
            return false;
        }
        self.evaluation = evaluation;
        self.evaluation_loading = false;
        true
    }

    pub fn view(&self) -> EvaluationView<'_> {
        if self.evaluation_loading {
            return EvaluationView::Loading;
        }
        match &self.evaluation {
            Some(evaluation) => EvaluationView::Loaded(evaluation),
            None => EvaluationView::NotFound,
        }
    }

    /// Modal title for the selected student.
    pub fn title(&self) -> String {
        match &self.selected_student {
            Some(student) => format!("Evaluation of {}", student.name),
            None => "Evaluation".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Score;

    fn student(id: u64) -> Student {
        Student {
            id: StudentId::Number(id.into()),
            name: format!("Student {}", id),
            photo: None,
        }
    }

    fn evaluation(subject: &str) -> Evaluation {
        Evaluation {
            score: Score::Number(7.5),
            teacher: "Silva".to_string(),
            subject: subject.to_string(),
            room: "B1".to_string(),
        }
    }

    #[test]
    fn test_open_shows_loading() {
        let mut modal = ModalState::new();
        modal.open(student(1));

        assert!(modal.visible);
        assert!(modal.evaluation_loading);
        assert!(modal.evaluation.is_none());
        assert_eq!(modal.view(), EvaluationView::Loading);
        assert_eq!(modal.title(), "Evaluation of Student 1");
    }

    #[test]
    fn test_resolve_matching_selection() {
        let mut modal = ModalState::new();
        modal.open(student(1));

        assert!(modal.resolve(&StudentId::Number(1.into()), Some(evaluation("Math"))));
        assert!(!modal.evaluation_loading);
        assert!(matches!(modal.view(), EvaluationView::Loaded(e) if e.subject == "Math"));
    }

    #[test]
    fn test_resolve_ignores_other_student() {
        let mut modal = ModalState::new();
        modal.open(student(2));

        assert!(!modal.resolve(&StudentId::Number(1.into()), Some(evaluation("Math"))));
        assert!(modal.evaluation_loading);
        assert!(modal.evaluation.is_none());
    }

    #[test]
    fn test_resolve_after_settled_is_ignored() {
        let mut modal = ModalState::new();
        modal.open(student(1));
        modal.resolve(&StudentId::Number(1.into()), Some(evaluation("Math")));

        assert!(!modal.resolve(&StudentId::Number(1.into()), None));
        assert!(modal.evaluation.is_some());
    }

    #[test]
    fn test_not_found_shape() {
        let mut modal = ModalState::new();
        modal.open(student(1));
        modal.resolve(&StudentId::Number(1.into()), None);

        assert_eq!(modal.view(), EvaluationView::NotFound);
    }

    #[test]
    fn test_close_resets_everything() {
        let mut modal = ModalState::new();
        modal.open(student(1));
        modal.resolve(&StudentId::Number(1.into()), Some(evaluation("Math")));

        modal.close();
        assert_eq!(modal, ModalState::default());

        // A response arriving after close has nothing to attach to
        assert!(!modal.resolve(&StudentId::Number(1.into()), Some(evaluation("Math"))));
    }
}
