use super::{failure, rejected, success, HandlerResponse};
use crate::db::models::{CollegePayload, CollegeQuery, MutationResponse};
use crate::db::DbClient;
use crate::logging::log_admin_action;
use crate::services::catalog::{filter_colleges, sort_colleges};
use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::to_value;
use tracing::info;

/// Handler for listing colleges
///
/// # Endpoint: GET /api/colleges?courseId=&search=&sort=
///
/// # Arguments
/// * `db` - Database client from application state
/// * `query` - Optional course restriction, free-text search and sort order
///
/// # Returns
/// * `(StatusCode, Json<ApiResponse>)` - Matching colleges in the requested order
pub(crate) async fn list_colleges(
    State(db): State<DbClient>,
    Query(query): Query<CollegeQuery>,
) -> HandlerResponse {
    match db.get_colleges(query.course_id).await {
        Ok(rows) => {
            let mut rows = filter_colleges(rows, query.search.as_deref());
            sort_colleges(&mut rows, query.sort.unwrap_or_default());
            success(StatusCode::OK, rows)
        }
        Err(err) => failure(err, "Failed to fetch colleges"),
    }
}

/// # Endpoint: GET /api/courses/:id/colleges
pub(crate) async fn list_colleges_for_course(
    State(db): State<DbClient>,
    Path(course_id): Path<i32>,
) -> HandlerResponse {
    match db.get_colleges_by_course(course_id).await {
        Ok(rows) => success(StatusCode::OK, rows),
        Err(err) => failure(err, "Failed to fetch colleges"),
    }
}

/// Handler for a single college with its recruiters and courses
///
/// # Endpoint: GET /api/colleges/:id
pub(crate) async fn get_college(
    State(db): State<DbClient>,
    Path(id): Path<i32>,
) -> HandlerResponse {
    match db.get_college_details(id).await {
        Ok(details) => success(StatusCode::OK, details),
        Err(err) => failure(err, "Failed to fetch college"),
    }
}

/// # Endpoint: POST /api/colleges
pub(crate) async fn create_college(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CollegePayload>,
) -> HandlerResponse {
    log_admin_action("POST", uri.path(), to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        return rejected(message);
    }

    let (college, courses, companies) = payload.into_parts();
    match db
        .insert_college(
            college,
            courses.unwrap_or_default(),
            companies.unwrap_or_default(),
        )
        .await
    {
        Ok(id) => {
            info!("College {} created", id);
            success(StatusCode::CREATED, MutationResponse::created(id, "College"))
        }
        Err(err) => failure(err, "Failed to add college"),
    }
}

/// Replaces a college. Association lists absent from the body are left untouched.
///
/// # Endpoint: PUT /api/colleges/:id
pub(crate) async fn update_college(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
    Json(payload): Json<CollegePayload>,
) -> HandlerResponse {
    log_admin_action("PUT", uri.path(), to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        return rejected(message);
    }

    let (college, courses, companies) = payload.into_parts();
    match db.update_college(id, college, courses, companies).await {
        Ok(()) => success(StatusCode::OK, MutationResponse::updated("College")),
        Err(err) => failure(err, "Failed to update college"),
    }
}

/// # Endpoint: DELETE /api/colleges/:id
pub(crate) async fn delete_college(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> HandlerResponse {
    log_admin_action("DELETE", uri.path(), None);

    match db.delete_college(id).await {
        Ok(()) => success(StatusCode::OK, MutationResponse::deleted("College")),
        Err(err) => failure(err, "Failed to delete college"),
    }
}
