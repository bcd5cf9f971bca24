//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource collection.

pub mod courses;
pub mod health;
pub mod params;
pub mod users;

pub use courses::{
    create_course_handler, delete_course_handler, get_course_handler, list_courses_handler,
    update_course_handler,
};
pub use health::health_handler;
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
