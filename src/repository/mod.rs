//! Student persistence: the repository trait and its backends.

mod memory;
mod postgres;

pub use memory::InMemoryStudentRepository;
pub use postgres::PgStudentRepository;

use crate::error::RepositoryError;
use crate::model::Student;
use async_trait::async_trait;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert when `student.id` is `None`, otherwise overwrite name, email and course of that row.
    /// A row that vanished before the overwrite is inserted again under a fresh id.
    async fn save(&self, student: Student) -> Result<Student, RepositoryError>;

    /// All rows ordered by id.
    async fn find_all(&self) -> Result<Vec<Student>, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, RepositoryError>;

    /// Deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;

    /// Reachability probe for readiness checks.
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
