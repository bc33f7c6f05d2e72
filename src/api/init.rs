use crate::state::AppState;
use axum::{
    error_handling::HandleErrorLayer,
    http::{Method, StatusCode},
    routing::{get, post, put},
    BoxError, Router,
};
use std::time::Duration;
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use super::{handlers::*, index::index};

/// Create, update and delete routes for every catalog entity under `prefix`
fn catalog_writes(prefix: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{prefix}/streams"), post(create_stream))
        .route(
            &format!("{prefix}/streams/:id"),
            put(update_stream).delete(delete_stream),
        )
        .route(&format!("{prefix}/courses"), post(create_course))
        .route(
            &format!("{prefix}/courses/:id"),
            put(update_course).delete(delete_course),
        )
        .route(&format!("{prefix}/colleges"), post(create_college))
        .route(
            &format!("{prefix}/colleges/:id"),
            put(update_college).delete(delete_college),
        )
        .route(&format!("{prefix}/companies"), post(create_company))
        .route(
            &format!("{prefix}/companies/:id"),
            put(update_company).delete(delete_company),
        )
        .route(&format!("{prefix}/jobs"), post(create_job))
        .route(
            &format!("{prefix}/jobs/:id"),
            put(update_job).delete(delete_job),
        )
}

pub fn initialize_router(state: AppState) -> Router {
    let error_handler = || {
        ServiceBuilder::new().layer(HandleErrorLayer::new(|err: BoxError| async move {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Unhandled error: {}", err),
            )
        }))
    };

    let global_rate_limit = |req_per_sec: u64| {
        ServiceBuilder::new()
            .layer(error_handler())
            .layer(BufferLayer::new(1024))
            .layer(RateLimitLayer::new(req_per_sec, Duration::from_secs(1)))
    };

    let rate_limit_per_ip = |timeout: u64, limit: u32| {
        let config = Box::new(
            GovernorConfigBuilder::default()
                .per_second(timeout)
                .burst_size(limit)
                .use_headers()
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .unwrap(),
        );

        ServiceBuilder::new()
            .layer(error_handler())
            .layer(GovernorLayer {
                config: Box::leak(config),
            })
    };

    // Outermost, so preflights for every route see the full method list
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Define routes with their rate limits
    Router::new()
        // Login (strictest limits)
        .route("/api/auth/login", post(login))
        .layer(
            global_rate_limit(10)
                .layer(rate_limit_per_ip(5, 5))
                .layer(CompressionLayer::new().zstd(true)),
        )
        // Admin writes, served both at /api and /api/admin
        .merge(catalog_writes("/api"))
        .merge(catalog_writes("/api/admin"))
        .route("/api/admin/stats", get(get_dashboard_stats))
        .layer(
            global_rate_limit(100)
                .layer(rate_limit_per_ip(1, 20))
                .layer(CompressionLayer::new().zstd(true)),
        )
        // Public catalog reads
        .route("/api/test", get(test_connection))
        .route("/api/streams", get(list_streams))
        .route("/api/streams/:id", get(get_stream))
        .route("/api/courses", get(list_courses))
        .route("/api/courses/:id", get(get_course))
        .route("/api/courses/:id/colleges", get(list_colleges_for_course))
        .route("/api/colleges", get(list_colleges))
        .route("/api/colleges/by-course/:course_id", get(list_colleges_for_course))
        .route("/api/colleges/:id", get(get_college))
        .route("/api/companies", get(list_companies))
        .route("/api/jobs", get(list_jobs))
        .route("/api/jobs/:id", get(get_job))
        .layer(
            global_rate_limit(10000)
                .layer(rate_limit_per_ip(1, 100))
                .layer(CompressionLayer::new().zstd(true)),
        )
        // Base route
        .route("/", get(|| async { index() }))
        .route("/health", get(|| async { StatusCode::OK }))
        // Apply common middleware
        .layer(cors)
        .layer(trace_layer)
        .with_state(state)
}
