use axum::Server;
use config::Config;
use std::net::SocketAddr;

mod api;
mod config;
mod db;
mod errors;
mod logging;
mod schema;
mod services;
mod state;
mod validation;

/// Result type for API
pub type Result<T> = std::result::Result<T, errors::ApiError>;

/// Static configuration instance for the API
static CONFIG: once_cell::sync::Lazy<Config> = once_cell::sync::Lazy::new(|| {
    dotenv::dotenv().ok();
    envy::from_env::<Config>().expect("Failed to load configuration")
});

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    logging::setup_logging(&CONFIG.log_dir, CONFIG.log_json)?;

    // Initialize database and Redis connections
    let db_client = db::DbClient::with_config(
        &CONFIG.database_url,
        CONFIG.redis_url.as_deref(),
        CONFIG.db_pool_size,
        CONFIG.cache_ttl_seconds,
    );

    if CONFIG.run_db_setup {
        match db_client.run_setup_script(&CONFIG.setup_script).await {
            Ok(report) if report.failed > 0 => tracing::warn!(
                "Database setup finished with {} failed statements",
                report.failed
            ),
            Ok(_) => tracing::info!("Database setup completed"),
            Err(e) => tracing::error!("Database setup failed: {}", e),
        }
    }

    // Log initial database status, the server still starts without it
    match db_client.check_connection().await {
        Ok(tables) => tracing::info!("Database connected, tables: {:?}", tables),
        Err(e) => tracing::error!("Database connection failed: {}", e),
    }

    // Setup API router and start server
    let app = api::initialize_router(state::AppState {
        db: db_client,
        credentials: state::AdminCredentials {
            username: CONFIG.admin_username.clone(),
            password: CONFIG.admin_password.clone(),
        },
    });
    let addr = SocketAddr::from(([0, 0, 0, 0], CONFIG.port));
    tracing::info!("Server starting on {}", addr);

    Server::bind(&addr)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await?;

    Ok(())
}
