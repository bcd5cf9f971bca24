//! Core entities.
//!
//! Each resource has a stored form carrying the storage-assigned id
//! ([`User`], [`Course`]) and an id-less form used for creation and full
//! replacement ([`NewUser`], [`NewCourse`]).

pub mod course;
pub mod user;

pub use course::{Course, NewCourse};
pub use user::{NewUser, User};
