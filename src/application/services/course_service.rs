//! Course management service.

use std::sync::Arc;

use crate::domain::entities::{Course, NewCourse};
use crate::domain::pagination::Page;
use crate::domain::repositories::CourseRepository;
use crate::domain::resource::Resource;
use crate::error::AppError;

/// Service implementing the CRUD contract for courses.
pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    /// Retrieves a course by id. Any failure is reported as "not found".
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course cannot be loaded.
    pub async fn get_course(&self, id: i64) -> Result<Course, AppError> {
        match self.repository.find_by_id(id).await {
            Ok(Some(course)) => Ok(course),
            Ok(None) => Err(AppError::resource_not_found(Resource::Course)),
            Err(e) => {
                tracing::warn!(course_id = id, error = %e, "Course lookup failed");
                Err(AppError::resource_not_found(Resource::Course))
            }
        }
    }

    pub async fn list_courses(&self, page: Page) -> Result<Vec<Course>, AppError> {
        self.repository.list(page).await
    }

    pub async fn create_course(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let course = self.repository.create(new_course).await?;
        tracing::info!(course_id = course.id, "Course created");
        Ok(course)
    }

    /// Replaces the course stored under `id`.
    pub async fn update_course(&self, id: i64, fields: NewCourse) -> Result<Course, AppError> {
        self.repository.update(Course::from_new(id, fields)).await
    }

    pub async fn delete_course(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(course_id = id, "Course deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCourseRepository;

    fn create_test_course(id: i64, name: &str) -> Course {
        Course::new(id, name.to_string(), Some("intro".to_string()))
    }

    #[tokio::test]
    async fn test_get_course_not_found() {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CourseService::new(Arc::new(mock_repo));

        let err = service.get_course(12).await.unwrap_err();

        assert_eq!(err.to_string(), "Course not found");
    }

    #[tokio::test]
    async fn test_get_course_storage_error_is_not_found() {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(AppError::internal("pool timed out")));

        let service = CourseService::new(Arc::new(mock_repo));

        let err = service.get_course(12).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_course_returns_assigned_id() {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo
            .expect_create()
            .withf(|new_course| new_course.name == "Databases")
            .times(1)
            .returning(|new_course| Ok(Course::from_new(9, new_course)));

        let service = CourseService::new(Arc::new(mock_repo));

        let course = service
            .create_course(NewCourse {
                name: "Databases".to_string(),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(course.id, 9);
    }

    #[tokio::test]
    async fn test_update_course_uses_path_id() {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo
            .expect_update()
            .withf(|course| course.id == 4)
            .times(1)
            .returning(Ok);

        let service = CourseService::new(Arc::new(mock_repo));

        let course = service
            .update_course(
                4,
                NewCourse {
                    name: "Networks".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(course.name, "Networks");
    }

    #[tokio::test]
    async fn test_list_courses() {
        let mut mock_repo = MockCourseRepository::new();

        let courses = vec![create_test_course(1, "OS")];
        mock_repo
            .expect_list()
            .times(1)
            .returning(move |_| Ok(courses.clone()));

        let service = CourseService::new(Arc::new(mock_repo));

        assert_eq!(service.list_courses(Page::default()).await.unwrap().len(), 1);
    }
}
