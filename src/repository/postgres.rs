//! PostgreSQL repository over `<schema>.students`.

use super::StudentRepository;
use crate::error::RepositoryError;
use crate::model::Student;
use crate::store::quote_ident;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PgStudentRepository {
    pool: PgPool,
    table: String,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        Self {
            pool,
            table: format!("{}.students", quote_ident(schema)),
        }
    }

    async fn insert(&self, student: &Student) -> Result<Student, RepositoryError> {
        let sql = format!(
            "INSERT INTO {} (name, email, course) VALUES ($1, $2, $3) RETURNING id, name, email, course",
            self.table
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(&student.name)
            .bind(&student.email)
            .bind(&student.course)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn save(&self, student: Student) -> Result<Student, RepositoryError> {
        let Some(id) = student.id else {
            return self.insert(&student).await;
        };
        let sql = format!(
            "UPDATE {} SET name = $2, email = $3, course = $4 WHERE id = $1 RETURNING id, name, email, course",
            self.table
        );
        tracing::debug!(sql = %sql, id, "query");
        let updated = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .bind(&student.name)
            .bind(&student.email)
            .bind(&student.course)
            .fetch_optional(&self.pool)
            .await?;
        match updated {
            Some(row) => Ok(row),
            None => self.insert(&student).await,
        }
    }

    async fn find_all(&self) -> Result<Vec<Student>, RepositoryError> {
        let sql = format!("SELECT id, name, email, course FROM {} ORDER BY id", self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Student>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, RepositoryError> {
        let sql = format!("SELECT id, name, email, course FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ensure_students_table;

    /// Fresh repository in a throwaway schema per test, or `None` when `DATABASE_URL` is unset.
    async fn repo(tag: &str) -> Option<(PgStudentRepository, PgPool, String)> {
        let url = std::env::var("DATABASE_URL").ok()?;
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .unwrap();
        let schema = format!("student_crud_{}_{}", tag, std::process::id());
        ensure_students_table(&pool, &schema).await.unwrap();
        Some((PgStudentRepository::new(pool.clone(), &schema), pool, schema))
    }

    async fn drop_schema(pool: &PgPool, schema: &str) {
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", quote_ident(schema)))
            .execute(pool)
            .await
            .unwrap();
    }

    fn draft(name: &str) -> Student {
        Student {
            id: None,
            name: Some(name.into()),
            email: None,
            course: Some("CS".into()),
        }
    }

    #[tokio::test]
    #[ignore = "needs a PostgreSQL server at DATABASE_URL"]
    async fn crud_round_against_postgres() {
        let Some((repo, pool, schema)) = repo("crud").await else {
            return;
        };

        let ann = repo.save(draft("Ann")).await.unwrap();
        let bob = repo.save(draft("Bob")).await.unwrap();
        assert!(ann.id.is_some());
        assert_eq!(repo.find_by_id(ann.id.unwrap()).await.unwrap(), Some(ann.clone()));

        let mut renamed = ann.clone();
        renamed.name = Some("Anna".into());
        assert_eq!(repo.save(renamed.clone()).await.unwrap(), renamed);
        assert_eq!(repo.find_all().await.unwrap(), vec![renamed, bob.clone()]);

        repo.delete_by_id(bob.id.unwrap()).await.unwrap();
        repo.delete_by_id(bob.id.unwrap()).await.unwrap();
        assert_eq!(repo.find_by_id(bob.id.unwrap()).await.unwrap(), None);
        repo.ping().await.unwrap();

        drop_schema(&pool, &schema).await;
    }

    #[tokio::test]
    #[ignore = "needs a PostgreSQL server at DATABASE_URL"]
    async fn save_on_vanished_row_inserts_under_fresh_id() {
        let Some((repo, pool, schema)) = repo("vanished").await else {
            return;
        };

        let ann = repo.save(draft("Ann")).await.unwrap();
        let old_id = ann.id.unwrap();
        repo.delete_by_id(old_id).await.unwrap();

        let again = repo.save(ann).await.unwrap();
        assert_ne!(again.id, Some(old_id));
        assert_eq!(again.name.as_deref(), Some("Ann"));
        assert_eq!(repo.find_by_id(old_id).await.unwrap(), None);
        assert_eq!(repo.find_all().await.unwrap(), vec![again]);

        drop_schema(&pool, &schema).await;
    }
}
