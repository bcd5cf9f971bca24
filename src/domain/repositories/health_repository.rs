//! Repository trait for storage liveness checks.

use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Runs a trivial round trip against storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if storage is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
