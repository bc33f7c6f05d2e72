use crate::db::models::{LoginRequest, LoginResponse, UserInfo};
use crate::db::DbClient;
use crate::errors::ErrorMessages;
use crate::state::AdminCredentials;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, warn};

/// Handler for the admin login
///
/// # Endpoint: POST /api/auth/login
///
/// # Arguments
/// * `db` - Database client, used to look up the stored admin user
/// * `credentials` - The configured username/password pair
/// * `payload` - Submitted username and password
///
/// # Returns
/// * `(StatusCode, Json<LoginResponse>)` - 200 with the user, or 401
pub(crate) async fn login(
    State(db): State<DbClient>,
    State(credentials): State<AdminCredentials>,
    Json(payload): Json<LoginRequest>,
) -> (StatusCode, Json<LoginResponse>) {
    if !credentials.matches(&payload.username, &payload.password) {
        warn!("Rejected login for user: {}", payload.username);
        return (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse {
                success: false,
                user: None,
                message: Some(ErrorMessages::InvalidCredentials.to_string()),
            }),
        );
    }

    // The stored row is preferred, a missing table or row still lets the admin in
    let user = match db.get_user_by_username(&payload.username).await {
        Ok(user) => UserInfo {
            id: user.id,
            username: user.username,
            role: user.role,
        },
        Err(err) => {
            warn!("Admin user lookup failed, using defaults: {}", err);
            UserInfo {
                id: 1,
                username: payload.username,
                role: "admin".to_string(),
            }
        }
    };

    info!("Admin {} logged in", user.username);
    (
        StatusCode::OK,
        Json(LoginResponse {
            success: true,
            user: Some(user),
            message: None,
        }),
    )
}
