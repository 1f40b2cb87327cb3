use axum::Json;
use userapi_shared::models::HealthResponse;

// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
