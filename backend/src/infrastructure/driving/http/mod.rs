pub mod courses;
pub mod error;
pub mod health;
pub mod videos;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::infrastructure::AppState;

pub use courses::course_routes;
pub use health::health_check;
pub use videos::video_routes;

/// Full HTTP surface: `/health` plus the course and video routes under `/api`.
pub fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    let api = course_routes().merge(video_routes());

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
