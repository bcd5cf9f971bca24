//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries
//! are checked at runtime so the crate builds without a live database.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage
//! - [`PgCourseRepository`] - Course storage
//! - [`PgHealthRepository`] - Connectivity probe for `/health`

pub mod pg_course_repository;
pub mod pg_health_repository;
pub mod pg_user_repository;

pub use pg_course_repository::PgCourseRepository;
pub use pg_health_repository::PgHealthRepository;
pub use pg_user_repository::PgUserRepository;
