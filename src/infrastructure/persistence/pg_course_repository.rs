//! PostgreSQL implementation of course repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Course, NewCourse};
use crate::domain::pagination::Page;
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct CourseRow {
    id: i64,
    name: String,
    description: Option<String>,
}

impl From<CourseRow> for Course {
    fn from(r: CourseRow) -> Self {
        Course::new(r.id, r.name, r.description)
    }
}

/// PostgreSQL repository for courses.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            "SELECT id, name, description FROM courses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Course::from))
    }

    async fn list(&self, page: Page) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, name, description
            FROM courses
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.count())
        .bind(page.start())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(new_course.name)
        .bind(new_course.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, course: Course) -> Result<Course, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            UPDATE courses SET
                name        = $2,
                description = $3
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(course.id)
        .bind(course.name)
        .bind(course.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::internal("record not found"));
        }

        Ok(())
    }
}
