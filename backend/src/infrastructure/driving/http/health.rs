use axum::response::Json;
use shared::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
