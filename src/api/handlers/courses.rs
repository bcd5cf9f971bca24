//! Handlers for course endpoints.
//!
//! Same contract as [`crate::api::handlers::users`], with course messages.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::api::dto::course::{CoursePayload, CourseResponse};
use crate::api::dto::pagination::QueryPairs;
use crate::api::dto::status::ResultResponse;
use crate::api::handlers::params::{page_from_query, parse_id, parse_payload};
use crate::domain::resource::Resource;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /courses?start=&count=`
pub async fn list_courses_handler(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let page = page_from_query(query);

    let courses = state.course_service.list_courses(page).await?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// `GET /courses/{id}`
pub async fn get_course_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<CourseResponse>, AppError> {
    let id = parse_id(path, Resource::Course)?;

    let course = state.course_service.get_course(id).await?;

    Ok(Json(course.into()))
}

/// `POST /courses`
pub async fn create_course_handler(
    State(state): State<AppState>,
    payload: Result<Json<CoursePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    let payload = parse_payload(payload)?;

    let course = state.course_service.create_course(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(course.into())))
}

/// `PUT /courses/{id}`
pub async fn update_course_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<CoursePayload>, JsonRejection>,
) -> Result<Json<CourseResponse>, AppError> {
    let id = parse_id(path, Resource::Course)?;
    let payload = parse_payload(payload)?;

    let course = state
        .course_service
        .update_course(id, payload.into())
        .await?;

    Ok(Json(course.into()))
}

/// `DELETE /courses/{id}`
pub async fn delete_course_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ResultResponse>, AppError> {
    let id = parse_id(path, Resource::Course)?;

    state.course_service.delete_course(id).await?;

    Ok(Json(ResultResponse::success()))
}
