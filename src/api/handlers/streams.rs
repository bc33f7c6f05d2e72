use super::{failure, rejected, success, HandlerResponse};
use crate::db::models::{MutationResponse, StreamChangeset, StreamPayload};
use crate::db::DbClient;
use crate::logging::log_admin_action;
use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::to_value;
use tracing::info;

/// Handler for listing every stream
///
/// # Endpoint: GET /api/streams
pub(crate) async fn list_streams(State(db): State<DbClient>) -> HandlerResponse {
    match db.get_streams().await {
        Ok(rows) => success(StatusCode::OK, rows),
        Err(err) => failure(err, "Failed to fetch streams"),
    }
}

/// # Endpoint: GET /api/streams/:id
pub(crate) async fn get_stream(State(db): State<DbClient>, Path(id): Path<i32>) -> HandlerResponse {
    match db.get_stream(id).await {
        Ok(stream) => success(StatusCode::OK, stream),
        Err(err) => failure(err, "Failed to fetch stream"),
    }
}

/// # Endpoint: POST /api/streams
pub(crate) async fn create_stream(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<StreamPayload>,
) -> HandlerResponse {
    log_admin_action("POST", uri.path(), to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        return rejected(message);
    }

    match db.insert_stream(&StreamChangeset::from(payload)).await {
        Ok(id) => {
            info!("Stream {} created", id);
            success(StatusCode::CREATED, MutationResponse::created(id, "Stream"))
        }
        Err(err) => failure(err, "Failed to add stream"),
    }
}

/// # Endpoint: PUT /api/streams/:id
pub(crate) async fn update_stream(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
    Json(payload): Json<StreamPayload>,
) -> HandlerResponse {
    log_admin_action("PUT", uri.path(), to_value(&payload).ok().as_ref());

    if let Err(message) = payload.validate() {
        return rejected(message);
    }

    match db.update_stream(id, &StreamChangeset::from(payload)).await {
        Ok(()) => success(StatusCode::OK, MutationResponse::updated("Stream")),
        Err(err) => failure(err, "Failed to update stream"),
    }
}

/// # Endpoint: DELETE /api/streams/:id
pub(crate) async fn delete_stream(
    State(db): State<DbClient>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> HandlerResponse {
    log_admin_action("DELETE", uri.path(), None);

    match db.delete_stream(id).await {
        Ok(()) => success(StatusCode::OK, MutationResponse::deleted("Stream")),
        Err(err) => failure(err, "Failed to delete stream"),
    }
}
