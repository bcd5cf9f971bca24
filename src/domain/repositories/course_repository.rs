//! Repository trait for courses.

use crate::domain::entities::{Course, NewCourse};
use crate::domain::pagination::Page;
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence collaborator for courses.
///
/// Same contract as [`crate::domain::repositories::UserRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    async fn list(&self, page: Page) -> Result<Vec<Course>, AppError>;

    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no such course exists.
    async fn update(&self, course: Course) -> Result<Course, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no such course exists.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
