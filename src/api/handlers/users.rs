//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::api::dto::pagination::QueryPairs;
use crate::api::dto::status::ResultResponse;
use crate::api::dto::user::{UserPayload, UserResponse};
use crate::api::handlers::params::{page_from_query, parse_id, parse_payload};
use crate::domain::resource::Resource;
use crate::error::AppError;
use crate::state::AppState;

/// Lists users.
///
/// # Endpoint
///
/// `GET /users?start=&count=`
///
/// `count` outside `1..=10` becomes 10, negative `start` becomes 0, and
/// non-numeric values count as absent. An empty result is `[]`.
///
/// # Errors
///
/// Returns 500 with the storage error message.
pub async fn list_users_handler(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let page = page_from_query(query);

    let users = state.user_service.list_users(page).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetches one user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not a non-negative integer.
/// Returns 404 if the user cannot be loaded, whatever the cause.
pub async fn get_user_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(path, Resource::User)?;

    let user = state.user_service.get_user(id).await?;

    Ok(Json(user.into()))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 if the body is not a valid user payload.
/// Returns 500 with the storage error message.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let payload = parse_payload(payload)?;

    let user = state.user_service.create_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Replaces a user.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// The path id wins over any `id` in the body.
///
/// # Errors
///
/// Returns 400 if `id` or the body is malformed (checked in that order).
/// Returns 500 if the user does not exist or storage fails.
pub async fn update_user_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(path, Resource::User)?;
    let payload = parse_payload(payload)?;

    let user = state.user_service.update_user(id, payload.into()).await?;

    Ok(Json(user.into()))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is malformed.
/// Returns 500 if the user does not exist or storage fails.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ResultResponse>, AppError> {
    let id = parse_id(path, Resource::User)?;

    state.user_service.delete_user(id).await?;

    Ok(Json(ResultResponse::success()))
}
