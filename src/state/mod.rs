// State management module.
// Gallery and modal state owned by the controller and read by the UI.

pub mod gallery;
pub mod modal;

pub use gallery::{GalleryState, LoadPhase};
pub use modal::{EvaluationView, ModalState};
