//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewUser, User};

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// `name` is required and `email` optional; their contents are stored as sent.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    /// Accepted for compatibility but ignored: identity comes from storage on
    /// create and from the path on update.
    #[serde(default)]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default)]
    pub email: Option<String>,
}

impl From<UserPayload> for NewUser {
    fn from(p: UserPayload) -> Self {
        NewUser {
            name: p.name,
            email: p.email,
        }
    }
}

/// JSON representation of a user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}
