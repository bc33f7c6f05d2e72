//! Request handlers for the career portal API.
//! Each module covers one catalog entity or a related group of endpoints.

pub mod admin; // Dashboard stats
pub mod auth; // Admin login
pub mod colleges;
pub mod companies;
pub mod courses;
pub mod health; // Database connectivity check
pub mod jobs;
pub mod streams;

pub(crate) use admin::get_dashboard_stats;
pub(crate) use auth::login;
pub(crate) use colleges::{
    create_college, delete_college, get_college, list_colleges, list_colleges_for_course,
    update_college,
};
pub(crate) use companies::{create_company, delete_company, list_companies, update_company};
pub(crate) use courses::{create_course, delete_course, get_course, list_courses, update_course};
pub(crate) use health::test_connection;
pub(crate) use jobs::{create_job, delete_job, get_job, list_jobs, update_job};
pub(crate) use streams::{create_stream, delete_stream, get_stream, list_streams, update_stream};

use crate::db::models::{ApiResponse, ErrorResponse, Status, SuccessResponse};
use crate::errors::ApiError;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;

pub(crate) type HandlerResponse = (StatusCode, Json<ApiResponse>);

/// Wraps a successful payload
pub(crate) fn success(status: StatusCode, body: impl Into<SuccessResponse>) -> HandlerResponse {
    (status, Json(ApiResponse::Success(body.into())))
}

/// Logs `err` and turns it into an error body. Internal failures report `fallback`.
pub(crate) fn failure(err: ApiError, fallback: &str) -> HandlerResponse {
    let status = err.status_code();
    if status.is_server_error() {
        error!("{}: {}", fallback, err);
    }
    (
        status,
        Json(
            ErrorResponse {
                status: Status::Error,
                error: err.public_message(fallback),
            }
            .into(),
        ),
    )
}

/// Rejects a payload that failed validation, before any database access
pub(crate) fn rejected(message: String) -> HandlerResponse {
    failure(ApiError::Validation(message), "Invalid request")
}
