//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! atelier API. It maps domain-specific errors to appropriate HTTP
//! status codes and JSON error responses, ensuring a consistent error
//! handling experience across the entire API.

use atelier_core::errors::ScheduleError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `ScheduleError` instances and
/// implements `IntoResponse` to convert them into HTTP responses with
/// appropriate status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

/// Converts application errors to HTTP responses.
///
/// Rejected input (invalid time or date ranges, validation failures)
/// surfaces as 400 rather than a server fault; the engine guarantees no
/// partial mutation happened before the rejection.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            ScheduleError::NotFound(_) => StatusCode::NOT_FOUND,
            ScheduleError::InvalidTimeRange(_) => StatusCode::BAD_REQUEST,
            ScheduleError::InvalidDateRange(_) => StatusCode::BAD_REQUEST,
            ScheduleError::Validation(_) => StatusCode::BAD_REQUEST,
            ScheduleError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScheduleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Allows using the `?` operator with functions that return
/// `Result<T, ScheduleError>` in handlers returning `Result<T, AppError>`.
impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

/// Wraps collaborator I/O errors in the database variant, so persistence
/// failures propagate unmodified as 500s.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Database(err))
    }
}
