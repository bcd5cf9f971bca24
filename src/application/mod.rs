//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI one call per CRUD operation.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User CRUD
//! - [`services::course_service::CourseService`] - Course CRUD

pub mod services;
