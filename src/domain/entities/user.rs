//! User entity.

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}

impl User {
    pub fn new(id: i64, name: String, email: Option<String>) -> Self {
        Self { id, name, email }
    }

    /// Attaches an identifier to user fields, replacing whatever identity
    /// the fields came with.
    pub fn from_new(id: i64, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
        }
    }
}

/// User fields without an identifier.
///
/// Used for creation, where storage assigns the id, and as the replacement
/// body of a full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_uses_given_id() {
        let new_user = NewUser {
            name: "ada".to_string(),
            email: Some("ada@example.com".to_string()),
        };

        let user = User::from_new(7, new_user);

        assert_eq!(user.id, 7);
        assert_eq!(user.name, "ada");
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    }
}
