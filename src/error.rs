//! Application error type and its HTTP mapping.
//!
//! Every failure on a request path ends up as an [`AppError`] and is rendered
//! as `{"error": "<message>"}` with the matching status code. Nothing on a
//! request path is allowed to crash the server.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::resource::Resource;

/// Message returned when a request body cannot be decoded.
pub const INVALID_PAYLOAD: &str = "Invalid request payload";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input: bad identifier or bad request body (400).
    #[error("{message}")]
    Validation { message: String },

    /// Single-entity lookup found nothing (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Storage failure; the message is passed to the client as-is (500).
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// `400 {"error":"Invalid <resource> ID"}`.
    pub fn invalid_id(resource: Resource) -> Self {
        Self::bad_request(format!("Invalid {} ID", resource.name()))
    }

    /// `404 {"error":"<Resource> not found"}`.
    pub fn resource_not_found(resource: Resource) -> Self {
        Self::not_found(format!("{} not found", resource.title()))
    }

    /// `400 {"error":"Invalid request payload"}`.
    pub fn invalid_payload() -> Self {
        Self::bad_request(INVALID_PAYLOAD)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(e.to_string())
    }
}
