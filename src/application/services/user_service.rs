//! User management service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::pagination::Page;
use crate::domain::repositories::UserRepository;
use crate::domain::resource::Resource;
use crate::error::AppError;

/// Service implementing the CRUD contract for users.
///
/// Each call is a single round trip to the repository; the service holds no
/// state of its own.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Retrieves a user by id.
    ///
    /// Any repository failure is reported as "not found". The underlying
    /// error is logged but never classified further.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user cannot be loaded.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        match self.repository.find_by_id(id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::resource_not_found(Resource::User)),
            Err(e) => {
                tracing::warn!(user_id = id, error = %e, "User lookup failed");
                Err(AppError::resource_not_found(Resource::User))
            }
        }
    }

    /// Lists users within a clamped window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self, page: Page) -> Result<Vec<User>, AppError> {
        self.repository.list(page).await
    }

    /// Creates a user. The id is assigned by storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Replaces the user stored under `id`.
    ///
    /// `id` is the only identity used; the fields carry none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the user does not exist or on database errors.
    pub async fn update_user(&self, id: i64, fields: NewUser) -> Result<User, AppError> {
        self.repository.update(User::from_new(id, fields)).await
    }

    /// Deletes a user.
    ///
    /// Deleting an id that does not exist is a storage failure, not a 404.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the user does not exist or on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
