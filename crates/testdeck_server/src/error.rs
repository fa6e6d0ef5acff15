//! Error shaping for the HTTP boundary.
//!
//! # Responsibility
//! - Translate repository outcomes into boundary-facing statuses.
//! - Keep store internals out of response bodies; details go to the log.

use axum::http::StatusCode;
use axum::response::Json;
use log::error;
use serde::{Deserialize, Serialize};
use testdeck_core::RepoError;

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Logs the underlying failure and returns a generic 500 body.
pub fn internal_error(context: &str) -> ApiError {
    error!("event=request_failed module=server status=error error={context}");
    response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
}

/// Maps repository errors onto the boundary taxonomy: not-found, conflict,
/// validation, or internal.
pub fn repo_error(err: RepoError) -> ApiError {
    match err {
        RepoError::SuiteNotFound(_) => response(StatusCode::NOT_FOUND, "Suite not found"),
        RepoError::CaseNotFound(_) => response(StatusCode::NOT_FOUND, "Test case not found"),
        RepoError::DuplicateSuiteName(_) => {
            response(StatusCode::CONFLICT, "Suite with this name already exists")
        }
        RepoError::Validation(err) => response(StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        RepoError::Db(err) => internal_error(&err.to_string()),
    }
}
