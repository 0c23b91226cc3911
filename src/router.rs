use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::AppState;

/// Build the application router with all routes
pub fn build(state: Arc<AppState>, frontend_dir: &str) -> Router {
    Router::new()
        // Health
        .route("/api/health", get(handlers::healthcheck))
        // Autofind extraction
        .route("/api/autofind/extract", post(handlers::autofind::extract))
        // Command generation
        .route("/api/generate", post(handlers::generate::generate))
        .route("/api/batch/generate", post(handlers::batch::generate))
        // Saved configuration routes
        .route("/api/configs", get(handlers::configs::list_configs))
        .route("/api/configs", post(handlers::configs::create_config))
        .route("/api/configs/export", get(handlers::configs::export_configs))
        .route("/api/configs/batch-delete", post(handlers::configs::batch_delete_configs))
        .route("/api/configs/:id", get(handlers::configs::get_config))
        .route("/api/configs/:id", put(handlers::configs::update_config))
        .route("/api/configs/:id", delete(handlers::configs::delete_config))
        // Static files (frontend)
        .nest_service("/assets", ServeDir::new(format!("{}/assets", frontend_dir)))
        .fallback_service(ServeDir::new(frontend_dir).fallback(
            tower_http::services::ServeFile::new(format!("{}/index.html", frontend_dir)),
        ))
        // Add state and middleware
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
