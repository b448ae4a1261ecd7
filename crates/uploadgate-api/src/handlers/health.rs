use axum::{response::IntoResponse, Json};
use uploadgate_core::models::HealthResponse;

/// Liveness probe. Does not contact the store.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Upload gateway is running".to_string(),
    })
}
