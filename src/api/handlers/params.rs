//! Shared extraction helpers for resource handlers.
//!
//! Extractor rejections are taken as `Result`s and converted here so that
//! every resource reports malformed input with the same messages.

use axum::{
    Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use serde::de::DeserializeOwned;

use crate::api::dto::pagination::{ListParams, QueryPairs};
use crate::domain::pagination::Page;
use crate::domain::resource::Resource;
use crate::error::AppError;

/// Parses a path identifier as a non-negative integer.
///
/// # Errors
///
/// Returns `400 Invalid <resource> ID` on anything else.
pub fn parse_id(path: Result<Path<String>, PathRejection>, resource: Resource) -> Result<i64, AppError> {
    let Ok(Path(raw)) = path else {
        return Err(AppError::invalid_id(resource));
    };

    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| AppError::invalid_id(resource))
}

/// Unwraps a JSON body.
///
/// Only the payload shape is checked: required fields present and every
/// field of the right type.
///
/// # Errors
///
/// Returns `400 Invalid request payload` if the body is not JSON or does not
/// match the payload shape.
pub fn parse_payload<T: DeserializeOwned>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        AppError::invalid_payload()
    })?;

    Ok(payload)
}

/// Turns listing query parameters into a clamped page. Never fails.
///
/// The first value of a repeated key is used, and each parameter is parsed
/// on its own.
pub fn page_from_query(query: Result<Query<QueryPairs>, QueryRejection>) -> Page {
    query
        .map(|Query(pairs)| ListParams::from_pairs(pairs))
        .unwrap_or_default()
        .into_page()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(raw: &str) -> Result<Path<String>, PathRejection> {
        Ok(Path(raw.to_string()))
    }

    #[test]
    fn test_parse_id_accepts_digits() {
        assert_eq!(parse_id(path("0"), Resource::User).unwrap(), 0);
        assert_eq!(parse_id(path("42"), Resource::User).unwrap(), 42);
    }

    #[test]
    fn test_page_from_query_uses_first_of_repeated_keys() {
        let pairs = vec![
            ("start".to_string(), "20".to_string()),
            ("count".to_string(), "3".to_string()),
            ("count".to_string(), "4".to_string()),
        ];
        assert_eq!(page_from_query(Ok(Query(pairs))), Page::clamped(20, 3));
    }

    #[test]
    fn test_parse_id_rejects_malformed() {
        for raw in ["abc", "", "1.5", "-1", "12a", "99999999999999999999"] {
            let err = parse_id(path(raw), Resource::Course).unwrap_err();
            assert_eq!(err.to_string(), "Invalid course ID", "raw={raw:?}");
        }
    }
}
