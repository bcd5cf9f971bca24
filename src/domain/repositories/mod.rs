//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence collaborators consumed by the
//! application services. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! with `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User CRUD
//! - [`CourseRepository`] - Course CRUD
//! - [`HealthRepository`] - Storage liveness
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` (feature `postgres-tests`).

pub mod course_repository;
pub mod health_repository;
pub mod user_repository;

pub use course_repository::CourseRepository;
pub use health_repository::HealthRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use health_repository::MockHealthRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
