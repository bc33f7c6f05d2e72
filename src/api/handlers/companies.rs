use super::{failure, rejected, success, HandlerResponse};
use crate::db::models::{CompanyChangeset, CompanyPayload, MutationResponse};
use crate::db::DbClient;
use crate::logging::log_admin_action;
use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::to_value;

/// # Endpoint: GET /api/companies
pub(crate) async fn list_companies(State(db): State<DbClient>) -> HandlerResponse {
    match db.get_companies().await {
        Ok(rows) => success(StatusCode::OK, rows),
        Err(err) => failure(err, "Failed to fetch companies"),
    }
}

/// # Endpoint: POST /api/companies
pub(crate) async fn create_company(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CompanyPayload>,
) -> HandlerResponse {
    log_admin_action("POST", uri.path(), to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        return rejected(message);
    }

    match db.insert_company(&CompanyChangeset::from(payload)).await {
        Ok(id) => success(StatusCode::CREATED, MutationResponse::created(id, "Company")),
        Err(err) => failure(err, "Failed to add company"),
    }
}

/// # Endpoint: PUT /api/companies/:id
pub(crate) async fn update_company(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
    Json(payload): Json<CompanyPayload>,
) -> HandlerResponse {
    log_admin_action("PUT", uri.path(), to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        return rejected(message);
    }

    match db.update_company(id, &CompanyChangeset::from(payload)).await {
        Ok(()) => success(StatusCode::OK, MutationResponse::updated("Company")),
        Err(err) => failure(err, "Failed to update company"),
    }
}

/// # Endpoint: DELETE /api/companies/:id
pub(crate) async fn delete_company(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> HandlerResponse {
    log_admin_action("DELETE", uri.path(), None);

    match db.delete_company(id).await {
        Ok(()) => success(StatusCode::OK, MutationResponse::deleted("Company")),
        Err(err) => failure(err, "Failed to delete company"),
    }
}
