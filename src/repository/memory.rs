//! In-memory repository keyed by id. Used by tests and `STORAGE_BACKEND=memory`.

use super::StudentRepository;
use crate::error::RepositoryError;
use crate::model::Student;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Student>,
    last_id: i64,
}

/// Ids start at 1 and are never reused, like a database sequence.
#[derive(Default)]
pub struct InMemoryStudentRepository {
    inner: RwLock<Inner>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn insert(&mut self, mut student: Student) -> Student {
        self.last_id += 1;
        student.id = Some(self.last_id);
        self.rows.insert(self.last_id, student.clone());
        student
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn save(&self, student: Student) -> Result<Student, RepositoryError> {
        let mut inner = self.inner.write().await;
        match student.id {
            Some(id) => match inner.rows.get_mut(&id) {
                Some(row) => {
                    row.name = student.name;
                    row.email = student.email;
                    row.course = student.course;
                    Ok(row.clone())
                }
                None => Ok(inner.insert(student)),
            },
            None => Ok(inner.insert(student)),
        }
    }

    async fn find_all(&self) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, RepositoryError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }
}
