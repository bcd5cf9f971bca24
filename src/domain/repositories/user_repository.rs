//! Repository trait for users.

use crate::domain::entities::{NewUser, User};
use crate::domain::pagination::Page;
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence collaborator for users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Lists users ordered by id within the given window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, page: Page) -> Result<Vec<User>, AppError>;

    /// Inserts a user and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Replaces every field of the user with `user.id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no such user exists or on database errors.
    async fn update(&self, user: User) -> Result<User, AppError>;

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no such user exists or on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
