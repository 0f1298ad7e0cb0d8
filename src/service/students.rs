//! Student CRUD over a `StudentRepository`. Absent records are `None`, not errors.

use crate::error::RepositoryError;
use crate::model::{Student, StudentPayload};
use crate::repository::StudentRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    /// Persist a new student. The id is always assigned by storage.
    pub async fn create(&self, payload: StudentPayload) -> Result<Student, RepositoryError> {
        let student = self.repo.save(Student::from_payload(payload)).await?;
        tracing::info!(id = ?student.id, "student created");
        Ok(student)
    }

    pub async fn list_all(&self) -> Result<Vec<Student>, RepositoryError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Student>, RepositoryError> {
        self.repo.find_by_id(id).await
    }

    /// Overwrite name, email and course of an existing student. Returns `None` and discards
    /// the payload when no student has this id.
    pub async fn update(&self, id: i64, payload: StudentPayload) -> Result<Option<Student>, RepositoryError> {
        let Some(mut student) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        student.apply(payload);
        let saved = self.repo.save(student).await?;
        tracing::info!(id, "student updated");
        Ok(Some(saved))
    }

    /// Delete by id without checking existence first; always confirms.
    pub async fn delete(&self, id: i64) -> Result<String, RepositoryError> {
        self.repo.delete_by_id(id).await?;
        tracing::info!(id, "student deleted");
        Ok(format!("Student deleted with ID: {}", id))
    }

    pub async fn ready(&self) -> Result<(), RepositoryError> {
        self.repo.ping().await
    }
}
