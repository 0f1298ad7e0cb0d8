//! Student CRUD: REST service for student records over a pluggable repository.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StorageBackend};
pub use error::{AppError, ConfigError, RepositoryError, StartupError};
pub use model::{Student, StudentPayload};
pub use repository::{InMemoryStudentRepository, PgStudentRepository, StudentRepository};
pub use routes::{app, common_routes, cors_layer, student_routes};
pub use service::StudentService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_students_table};
