//! Student CRUD server: reads config from env, prepares storage, serves /students.

use std::sync::Arc;
use student_crud::{
    app, ensure_database_exists, ensure_students_table, AppState, InMemoryStudentRepository,
    PgStudentRepository, ServerConfig, StorageBackend, StudentRepository, StudentService,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("student_crud=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let repo = connect_repository(&config).await?;
    let state = AppState {
        students: StudentService::new(repo),
    };

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(storage = ?config.storage, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, &config)).await?;
    Ok(())
}

async fn connect_repository(config: &ServerConfig) -> Result<Arc<dyn StudentRepository>, Box<dyn std::error::Error>> {
    match config.storage {
        StorageBackend::Memory => Ok(Arc::new(InMemoryStudentRepository::new())),
        StorageBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_students_table(&pool, &config.schema).await?;
            Ok(Arc::new(PgStudentRepository::new(pool, &config.schema)))
        }
    }
}
