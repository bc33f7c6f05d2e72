use super::{failure, success, HandlerResponse};
use crate::db::DbClient;
use axum::extract::State;
use axum::http::StatusCode;

/// # Endpoint: GET /api/admin/stats
pub(crate) async fn get_dashboard_stats(State(db): State<DbClient>) -> HandlerResponse {
    match db.get_dashboard_stats().await {
        Ok(stats) => success(StatusCode::OK, stats),
        Err(err) => failure(err, "Failed to fetch dashboard stats"),
    }
}
