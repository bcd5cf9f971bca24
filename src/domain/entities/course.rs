//! Course entity.

/// A stored course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl Course {
    pub fn new(id: i64, name: String, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    pub fn from_new(id: i64, new_course: NewCourse) -> Self {
        Self {
            id,
            name: new_course.name,
            description: new_course.description,
        }
    }
}

/// Course fields without an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub description: Option<String>,
}
