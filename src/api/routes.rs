//! API route configuration.

use crate::api::handlers::{
    create_course_handler, create_user_handler, delete_course_handler, delete_user_handler,
    get_course_handler, get_user_handler, list_courses_handler, list_users_handler,
    update_course_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// CRUD routes for every resource collection.
///
/// # Endpoints
///
/// - `GET    /users`          - List users (`?start=&count=`)
/// - `POST   /users`          - Create a user
/// - `GET    /users/{id}`     - Fetch a user
/// - `PUT    /users/{id}`     - Replace a user
/// - `DELETE /users/{id}`     - Delete a user
/// - `GET    /courses`        - List courses (`?start=&count=`)
/// - `POST   /courses`        - Create a course
/// - `GET    /courses/{id}`   - Fetch a course
/// - `PUT    /courses/{id}`   - Replace a course
/// - `DELETE /courses/{id}`   - Delete a course
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route(
            "/courses",
            get(list_courses_handler).post(create_course_handler),
        )
        .route(
            "/courses/{id}",
            get(get_course_handler)
                .put(update_course_handler)
                .delete(delete_course_handler),
        )
}
