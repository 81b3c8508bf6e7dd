//! Unified error types for the employee API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Store-level errors raised by repository adapters
//! - `AppError`: Application layer errors (wraps domain, validation and
//!   salary errors for HTTP responses)
//!
//! Validation and proration errors live next to their rules in
//! `domain::validation` and `domain::salary`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::salary::SalaryError;
use crate::domain::validation::ValidationError;

/// Domain layer errors - raised by the store
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Application layer errors - used by services and HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Salary(#[from] SalaryError),

    #[error("Route id {path_id} does not match body id {body_id}")]
    IdMismatch { path_id: i32, body_id: i32 },

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Whether the caller may retry the same request unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::Conflict(_)))
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "Conflict", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(e.to_string()),
            ),
            AppError::Salary(e) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(e.to_string()),
            ),
            AppError::IdMismatch { .. } => (
                StatusCode::BAD_REQUEST,
                "Id mismatch",
                Some(self.to_string()),
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        let mut response = (status, body).into_response();
        if self.is_retryable() {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from_static("1"));
        }
        response
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        assert_eq!(
            status_of(ValidationError::InvalidName.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ValidationError::NonPositiveSalary(Decimal::ZERO).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(SalaryError::EmptyPeriod { days: 0 }.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::IdMismatch {
                path_id: 1,
                body_id: 2
            }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_records_are_not_found() {
        assert_eq!(
            status_of(AppError::NotFound("Employee 'Петр' not found".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DomainError::NotFound("employee 3".into()).into()),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn conflicts_are_retryable_409s() {
        let err = AppError::from(DomainError::Conflict("employee 3".into()));
        assert!(err.is_retryable());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(response.headers()[header::RETRY_AFTER], "1");
        assert!(!AppError::NotFound("x".into()).is_retryable());
    }

    #[test]
    fn store_failures_hide_details() {
        assert_eq!(
            status_of(DomainError::Database("connection reset".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn id_mismatch_message_names_both_ids() {
        let err = AppError::IdMismatch {
            path_id: 4,
            body_id: 9,
        };
        assert_eq!(err.to_string(), "Route id 4 does not match body id 9");
    }
}
