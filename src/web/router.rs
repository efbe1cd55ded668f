//! Router configuration for the Web API.

use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{delete_file, download_file, list_files, upload_gateway, AppState};

/// Create the main API router.
///
/// `/api` carries the JSON file-management API; `/uploads` and everything
/// below it is handed raw to the upload engine, with no body parsing on
/// this side.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let file_routes = Router::new()
        .route("/files", get(list_files))
        .route("/files/:filename", get(download_file).delete(delete_file));

    Router::new()
        .nest("/api", file_routes)
        .route("/uploads", any(upload_gateway))
        .route("/uploads/*id", any(upload_gateway))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
