use crate::handlers::{delete, download, health, list, upload};
use crate::middleware::logging;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/", get(list::list_files))
        // Uploads stream arbitrarily large bodies; no request size cap.
        .route(
            "/upload",
            post(upload::upload_files).layer(DefaultBodyLimit::disable()),
        )
        .route("/delete", post(delete::delete_files))
        .route("/download/{*name}", get(download::download_file))
        .route("/files/{*name}", get(download::serve_file))
        .route("/health", get(health::health_check))
        .layer(middleware::from_fn(logging::logging_middleware))
        .with_state(state)
}
