//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Request bodies
//! are checked for shape only.

pub mod course;
pub mod health;
pub mod pagination;
pub mod status;
pub mod user;
