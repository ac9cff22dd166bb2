pub mod config;
pub mod error;
pub mod files;
pub mod index;
pub mod messages;
pub mod staging;
pub mod state;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::AppError;
pub use staging::{StagedFile, Staging};
pub use state::AppState;

/// Build the full HTTP surface. `body_limit` caps every request body.
pub fn router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/upload", post(files::upload_file))
        .route("/message", post(messages::post_message))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health — liveness check, never touches the database.
pub async fn health() -> &'static str {
    "ok"
}
