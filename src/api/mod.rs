// Student API module.
// Provides the HTTP client, response types, and the fetch seam the controller uses.

pub mod client;
pub mod endpoints;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;

pub use client::ApiClient;
pub use types::*;

/// Where the gallery gets students and evaluations from.
#[async_trait]
pub trait StudentSource: Send + Sync {
    async fn fetch_students(&self) -> Result<Vec<Student>>;

    /// `Ok(None)` when the student has no evaluation.
    async fn fetch_evaluation(&self, id: &StudentId) -> Result<Option<Evaluation>>;
}
