use super::{failure, rejected, success, HandlerResponse};
use crate::db::courses::StreamFilter;
use crate::db::models::{CourseChangeset, CoursePayload, CourseQuery, MutationResponse};
use crate::db::DbClient;
use crate::logging::log_admin_action;
use crate::services::catalog::filter_courses;
use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::to_value;

impl CourseQuery {
    /// Numeric stream id wins over the slug when both are given
    fn stream_filter(&self) -> Option<StreamFilter> {
        match (self.stream_id, self.stream.as_deref().map(str::trim)) {
            (Some(id), _) => Some(StreamFilter::Id(id)),
            (None, Some(slug)) if !slug.is_empty() => Some(StreamFilter::Slug(slug.to_string())),
            _ => None,
        }
    }
}

/// Handler for listing courses
///
/// # Endpoint: GET /api/courses?streamId=&stream=&search=
///
/// # Arguments
/// * `db` - Database client from application state
/// * `query` - Optional stream restriction and free-text search
pub(crate) async fn list_courses(
    State(db): State<DbClient>,
    Query(query): Query<CourseQuery>,
) -> HandlerResponse {
    match db.get_courses(query.stream_filter()).await {
        Ok(rows) => success(StatusCode::OK, filter_courses(rows, query.search.as_deref())),
        Err(err) => failure(err, "Failed to fetch courses"),
    }
}

/// # Endpoint: GET /api/courses/:id
pub(crate) async fn get_course(State(db): State<DbClient>, Path(id): Path<i32>) -> HandlerResponse {
    match db.get_course(id).await {
        Ok(course) => success(StatusCode::OK, course),
        Err(err) => failure(err, "Failed to fetch course"),
    }
}

/// # Endpoint: POST /api/courses
pub(crate) async fn create_course(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CoursePayload>,
) -> HandlerResponse {
    log_admin_action("POST", uri.path(), to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        return rejected(message);
    }

    match db.insert_course(&CourseChangeset::from(payload)).await {
        Ok(id) => success(StatusCode::CREATED, MutationResponse::created(id, "Course")),
        Err(err) => failure(err, "Failed to add course"),
    }
}

/// # Endpoint: PUT /api/courses/:id
pub(crate) async fn update_course(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
    Json(payload): Json<CoursePayload>,
) -> HandlerResponse {
    log_admin_action("PUT", uri.path(), to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        return rejected(message);
    }

    match db.update_course(id, &CourseChangeset::from(payload)).await {
        Ok(()) => success(StatusCode::OK, MutationResponse::updated("Course")),
        Err(err) => failure(err, "Failed to update course"),
    }
}

/// # Endpoint: DELETE /api/courses/:id
pub(crate) async fn delete_course(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> HandlerResponse {
    log_admin_action("DELETE", uri.path(), None);

    match db.delete_course(id).await {
        Ok(()) => success(StatusCode::OK, MutationResponse::deleted("Course")),
        Err(err) => failure(err, "Failed to delete course"),
    }
}
