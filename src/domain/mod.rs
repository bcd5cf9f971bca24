//! Domain layer: entities, pagination policy and persistence contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Users and courses
//! - [`repositories`] - Persistence traits implemented by the infrastructure layer
//! - [`pagination`] - Listing window with its clamping policy
//! - [`resource`] - Resource names used in client-facing messages
//!
//! The domain layer does not depend on infrastructure or presentation code.

pub mod entities;
pub mod pagination;
pub mod repositories;
pub mod resource;
