//! Names of the resource collections exposed over HTTP.

/// A resource kind served through the CRUD endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Course,
}

impl Resource {
    /// Lowercase name used inside messages, e.g. `"Invalid user ID"`.
    pub fn name(self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::Course => "course",
        }
    }

    /// Capitalized name used at the start of messages, e.g. `"User not found"`.
    pub fn title(self) -> &'static str {
        match self {
            Resource::User => "User",
            Resource::Course => "Course",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Resource::User.name(), "user");
        assert_eq!(Resource::User.title(), "User");
        assert_eq!(Resource::Course.name(), "course");
        assert_eq!(Resource::Course.title(), "Course");
    }
}
