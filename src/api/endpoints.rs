// Student API endpoint functions.
// Typed fetches for the student list and a single student's evaluation.

use async_trait::async_trait;

use crate::error::Result;

use super::StudentSource;
use super::client::ApiClient;
use super::types::{Evaluation, Student, StudentId};

impl ApiClient {
    /// Get the full student collection.
    pub async fn get_students(&self) -> Result<Vec<Student>> {
        let response = self.get("/estudantes").await?;
        let students: Vec<Student> = response.json().await?;
        Ok(students)
    }

    /// Get a student's evaluation. A `null` body means the student has none.
    pub async fn get_evaluation(&self, id: &StudentId) -> Result<Option<Evaluation>> {
        let response = self.get(&format!("/avaliacao/{}", id)).await?;
        let evaluation: Option<Evaluation> = response.json().await?;
        Ok(evaluation)
    }
}

#[async_trait]
impl StudentSource for ApiClient {
    async fn fetch_students(&self) -> Result<Vec<Student>> {
        self.get_students().await
    }

    async fn fetch_evaluation(&self, id: &StudentId) -> Result<Option<Evaluation>> {
        self.get_evaluation(id).await
    }
}
