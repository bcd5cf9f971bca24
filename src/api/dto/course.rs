//! DTOs for course endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Course, NewCourse};

/// Request body for `POST /courses` and `PUT /courses/{id}`.
///
/// `id` is accepted and ignored, as for users.
#[derive(Debug, Deserialize)]
pub struct CoursePayload {
    #[serde(default)]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl From<CoursePayload> for NewCourse {
    fn from(p: CoursePayload) -> Self {
        NewCourse {
            name: p.name,
            description: p.description,
        }
    }
}

/// JSON representation of a course.
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Course> for CourseResponse {
    fn from(c: Course) -> Self {
        CourseResponse {
            id: c.id,
            name: c.name,
            description: c.description,
        }
    }
}
