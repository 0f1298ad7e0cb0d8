//! StudentService: CRUD operations delegated to a repository.

mod students;
pub use students::StudentService;
