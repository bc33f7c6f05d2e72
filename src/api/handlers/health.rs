use crate::db::DbClient;
use crate::errors::ErrorMessages;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::error;

/// Database connectivity check
///
/// # Endpoint: GET /api/test
pub(crate) async fn test_connection(State(db): State<DbClient>) -> (StatusCode, Json<Value>) {
    match db.check_connection().await {
        Ok(tables) => {
            let redis = if !db.cache_enabled() {
                json!("disabled")
            } else {
                match db.get_async_redis_conn().await {
                    Ok(_) => json!("connected"),
                    Err(e) => json!({ "status": "error", "message": e.to_string() }),
                }
            };
            (
                StatusCode::OK,
                Json(json!({
                    "message": "Database connection successful",
                    "tables": tables,
                    "redis": redis,
                    "timestamp": chrono::Utc::now()
                })),
            )
        }
        Err(err) => {
            error!("Database connection failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "error": ErrorMessages::DB.to_string() })),
            )
        }
    }
}
