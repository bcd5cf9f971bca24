//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CourseService, UserService};
use crate::domain::repositories::HealthRepository;

/// Services available to handlers.
///
/// Cloned per request; every field is a cheap `Arc` handle. The database
/// pool lives behind the repositories the services were built with.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub course_service: Arc<CourseService>,
    pub health: Arc<dyn HealthRepository>,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserService>,
        course_service: Arc<CourseService>,
        health: Arc<dyn HealthRepository>,
    ) -> Self {
        Self {
            user_service,
            course_service,
            health,
        }
    }
}
