use super::{failure, rejected, success, HandlerResponse};
use crate::db::models::{JobDetails, JobFilters, JobPayload, MutationResponse};
use crate::db::DbClient;
use crate::logging::log_admin_action;
use crate::services::jobs::to_details;
use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::to_value;
use tracing::info;

/// Handler for searching job listings
///
/// # Endpoint: GET /api/jobs
///
/// # Arguments
/// * `db` - Database client from application state
/// * `filters` - title, company, location, salaryMin, keyword, jobType, industry and sort
///
/// # Returns
/// * `(StatusCode, Json<ApiResponse>)` - Matching jobs, each with `days_remaining`
pub(crate) async fn list_jobs(
    State(db): State<DbClient>,
    Query(filters): Query<JobFilters>,
) -> HandlerResponse {
    match db.get_jobs(&filters).await {
        Ok(rows) => {
            info!("Found {} jobs for {:?}", rows.len(), filters);
            let now = Utc::now();
            let details: Vec<JobDetails> = rows.into_iter().map(|job| to_details(job, now)).collect();
            success(StatusCode::OK, details)
        }
        Err(err) => failure(err, "Failed to fetch jobs"),
    }
}

/// # Endpoint: GET /api/jobs/:id
pub(crate) async fn get_job(State(db): State<DbClient>, Path(id): Path<i32>) -> HandlerResponse {
    match db.get_job(id).await {
        Ok(job) => success(StatusCode::OK, to_details(job, Utc::now())),
        Err(err) => failure(err, "Failed to fetch job"),
    }
}

/// # Endpoint: POST /api/jobs
pub(crate) async fn create_job(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<JobPayload>,
) -> HandlerResponse {
    log_admin_action("POST", uri.path(), to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        return rejected(message);
    }

    let (job, posted_date) = payload.into_parts();
    match db.insert_job(job, posted_date).await {
        Ok(id) => success(StatusCode::CREATED, MutationResponse::created(id, "Job")),
        Err(err) => failure(err, "Failed to add job"),
    }
}

/// Replaces a job listing. The posted date never changes.
///
/// # Endpoint: PUT /api/jobs/:id
pub(crate) async fn update_job(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
    Json(payload): Json<JobPayload>,
) -> HandlerResponse {
    log_admin_action("PUT", uri.path(), to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        return rejected(message);
    }

    let (job, _) = payload.into_parts();
    match db.update_job(id, &job).await {
        Ok(()) => success(StatusCode::OK, MutationResponse::updated("Job")),
        Err(err) => failure(err, "Failed to update job"),
    }
}

/// # Endpoint: DELETE /api/jobs/:id
pub(crate) async fn delete_job(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> HandlerResponse {
    log_admin_action("DELETE", uri.path(), None);

    match db.delete_job(id).await {
        Ok(()) => success(StatusCode::OK, MutationResponse::deleted("Job")),
        Err(err) => failure(err, "Failed to delete job"),
    }
}
